//! Table rendering for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use homestock_inventory::{BadgeColor, Category, InventoryItem, InventoryStats};

const DESCRIPTION_WIDTH: usize = 40;

pub fn items_table(items: &[&InventoryItem], styled: bool) -> Table {
    let mut table = new_table(styled);
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Item Name"),
        header_cell("Quantity"),
        header_cell("Category"),
        header_cell("Location"),
        header_cell("Description"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);

    for item in items {
        table.add_row(vec![
            Cell::new(item.id_typed().short()).fg(Color::DarkGrey),
            Cell::new(item.name()).add_attribute(Attribute::Bold),
            Cell::new(item.quantity()),
            category_cell(item.category()),
            Cell::new(item.location()),
            Cell::new(truncate(item.description(), DESCRIPTION_WIDTH)),
        ]);
    }
    table
}

/// Categories in use (sorted by name) with how many items each holds.
pub fn categories_table(items: &[InventoryItem], stats: &InventoryStats, styled: bool) -> Table {
    let mut table = new_table(styled);
    table.set_header(vec![header_cell("Category"), header_cell("Items")]);
    align_column(&mut table, 1, CellAlignment::Right);

    for category in &stats.categories {
        let count = items.iter().filter(|i| i.category() == *category).count();
        table.add_row(vec![category_cell(*category), Cell::new(count)]);
    }
    table
}

pub fn stats_line(stats: &InventoryStats) -> String {
    format!(
        "Total Items: {} | Categories: {} | Total Quantity: {}",
        stats.total_items,
        stats.category_count(),
        stats.total_quantity
    )
}

pub fn badge_color(color: BadgeColor) -> Color {
    match color {
        BadgeColor::Blue => Color::Blue,
        BadgeColor::Green => Color::Green,
        BadgeColor::Purple => Color::Magenta,
        BadgeColor::Yellow => Color::Yellow,
        BadgeColor::Red => Color::Red,
        BadgeColor::Gray => Color::Grey,
    }
}

fn new_table(styled: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !styled {
        table.force_no_tty();
    }
    table
}

fn category_cell(category: Category) -> Cell {
    Cell::new(category.as_str()).fg(badge_color(category.badge_color()))
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use homestock_inventory::InventoryStore;

    #[test]
    fn items_table_lists_every_row() {
        let store = InventoryStore::with_sample_items();
        let rows: Vec<&InventoryItem> = store.list().iter().collect();
        let rendered = items_table(&rows, false).to_string();

        assert!(rendered.contains("Wireless Headphones"));
        assert!(rendered.contains("Kitchen Cabinet"));
        assert!(rendered.contains("Clothing"));
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn categories_table_counts_items() {
        let store = InventoryStore::with_sample_items();
        let stats = InventoryStats::compute(store.list());
        let rendered = categories_table(store.list(), &stats, false).to_string();

        let clothing = rendered.find("Clothing").unwrap();
        let electronics = rendered.find("Electronics").unwrap();
        let food = rendered.find("Food").unwrap();
        assert!(clothing < electronics && electronics < food);
    }

    #[test]
    fn stats_line_reports_all_three_numbers() {
        let store = InventoryStore::with_sample_items();
        let stats = InventoryStats::compute(store.list());
        assert_eq!(
            stats_line(&stats),
            "Total Items: 3 | Categories: 3 | Total Quantity: 8"
        );
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let long = "x".repeat(60);
        let cut = truncate(&long, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn every_badge_color_maps_to_a_terminal_color() {
        assert_eq!(badge_color(Category::Clothing.badge_color()), Color::Magenta);
        assert_eq!(badge_color(Category::Office.badge_color()), Color::Grey);
    }
}
