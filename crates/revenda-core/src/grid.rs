//! Declarative column schema and cell formatting for the car grid
//!
//! Pure `Car -> text` mappings, independent of the rendering widget. The
//! web layer iterates [`Column::ALL`] for headers and calls [`cell_text`]
//! per cell; the two action columns (edit, delete) are rendered by the
//! widget itself and never go through this module.

use crate::types::Car;

/// Rows shown per grid page
pub const PAGE_SIZE: usize = 5;

/// Data columns of the car grid, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Record identifier
    Id,
    /// Combined brand and model
    BrandModel,
    /// Body color
    Color,
    /// Year of manufacture
    YearManufacture,
    /// Imported flag
    Imported,
    /// License plates
    Plates,
    /// Selling price in BRL
    SellingPrice,
}

impl Column {
    /// All data columns in display order
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::BrandModel,
        Self::Color,
        Self::YearManufacture,
        Self::Imported,
        Self::Plates,
        Self::SellingPrice,
    ];

    /// Header label
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Id => "Cód.",
            Self::BrandModel => "Marca/Modelo",
            Self::Color => "Cor",
            Self::YearManufacture => "Ano de fabricação",
            Self::Imported => "Importado",
            Self::Plates => "Placas",
            Self::SellingPrice => "Preço de venda",
        }
    }

    /// Column width in pixels
    #[must_use]
    pub const fn width(self) -> u32 {
        match self {
            Self::Id => 70,
            Self::BrandModel => 250,
            Self::Color | Self::Imported => 100,
            Self::YearManufacture => 160,
            Self::Plates => 150,
            Self::SellingPrice => 200,
        }
    }
}

/// Text rendered in the cell for `car` under `column`.
#[must_use]
pub fn cell_text(car: &Car, column: Column) -> String {
    match column {
        Column::Id => car.id.to_string(),
        Column::BrandModel => car.display_name(),
        Column::Color => car.color.clone(),
        Column::YearManufacture => car.year_manufacture.to_string(),
        Column::Imported => {
            if car.is_imported() {
                "Sim".to_string()
            } else {
                String::new()
            }
        }
        Column::Plates => car.plates.clone(),
        Column::SellingPrice => format_brl(car.selling_price),
    }
}

/// Format a value as Brazilian currency: `R$` prefix, `.` thousands
/// grouping, `,` decimal separator, two decimal places.
#[must_use]
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Number of pages needed for `len` rows; an empty list still has one page.
#[must_use]
pub fn page_count(len: usize) -> u32 {
    u32::try_from(len.div_ceil(PAGE_SIZE).max(1)).unwrap_or(u32::MAX)
}

/// The slice of `items` visible on 1-based `page`; out-of-range pages are
/// clamped to the nearest valid one.
#[must_use]
pub fn page_slice<T>(items: &[T], page: u32) -> &[T] {
    if items.is_empty() {
        return items;
    }
    let page = page.clamp(1, page_count(items.len())) as usize;
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
