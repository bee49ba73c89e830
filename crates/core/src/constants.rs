/// Decimal precision for display values (percentages, rounded amounts)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default horizon simulated by the wealth projection, in years
pub const DEFAULT_PROJECTION_YEARS: u32 = 40;

/// Palette cycled when assigning budget category colors
pub const CATEGORY_COLOR_PALETTE: &[&str] = &[
    "#EF4444", "#F97316", "#3B82F6", "#10B981", "#A855F7", "#6366F1", "#EC4899",
];
