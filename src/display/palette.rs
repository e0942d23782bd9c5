//! Category color lookup
//!
//! Every category maps to a stable visual identity so the dashboard, the
//! expense list and the charts agree. Names outside the known table resolve
//! to the `Other` style.

/// Color tokens for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Badge background token
    pub bg: &'static str,
    /// Badge text token
    pub text: &'static str,
    /// Legend dot token
    pub dot: &'static str,
    /// Chart fill, hex
    pub chart: &'static str,
    /// ANSI SGR foreground code for terminal output
    pub ansi: u8,
}

const FOOD: CategoryStyle = CategoryStyle {
    bg: "bg-emerald-100",
    text: "text-emerald-700",
    dot: "bg-emerald-500",
    chart: "#10b981",
    ansi: 32,
};

const TRANSPORT: CategoryStyle = CategoryStyle {
    bg: "bg-amber-100",
    text: "text-amber-700",
    dot: "bg-amber-500",
    chart: "#f59e0b",
    ansi: 33,
};

const ENTERTAINMENT: CategoryStyle = CategoryStyle {
    bg: "bg-violet-100",
    text: "text-violet-700",
    dot: "bg-violet-500",
    chart: "#7c3aed",
    ansi: 35,
};

const BILLS: CategoryStyle = CategoryStyle {
    bg: "bg-cyan-100",
    text: "text-cyan-700",
    dot: "bg-cyan-500",
    chart: "#06b6d4",
    ansi: 36,
};

const SHOPPING: CategoryStyle = CategoryStyle {
    bg: "bg-blue-100",
    text: "text-blue-700",
    dot: "bg-blue-500",
    chart: "#2563eb",
    ansi: 34,
};

const OTHER: CategoryStyle = CategoryStyle {
    bg: "bg-rose-100",
    text: "text-rose-700",
    dot: "bg-rose-500",
    chart: "#f43f5e",
    ansi: 31,
};

/// Style for a category name; unknown and custom names get the `Other` style
pub fn style_for(category: &str) -> &'static CategoryStyle {
    match category {
        "Food" => &FOOD,
        "Transport" => &TRANSPORT,
        "Entertainment" => &ENTERTAINMENT,
        "Bills" => &BILLS,
        "Shopping" => &SHOPPING,
        _ => &OTHER,
    }
}

/// Hex chart color for a category
pub fn chart_color(category: &str) -> &'static str {
    style_for(category).chart
}

/// Wrap `text` in the category's terminal color
pub fn paint(category: &str, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", style_for(category).ansi, text)
}
