//! Sample data loaded at startup

use tracing::error;

use crate::grid::Grid;
use crate::hierarchy::{Hierarchy, TreeNode};

pub const TABLE_HEADERS: [&str; 6] = ["ID", "Nom", "Type", "Date", "Statut", "Valeur"];

pub const TREE_HEADERS: [&str; 3] = ["Élément", "Type", "Valeur"];

pub const CATEGORIES: [&str; 5] = ["Tous", "Clients", "Produits", "Commandes", "Factures"];

pub const COMBO_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];

const SAMPLE_ROWS: usize = 10;

/// Cells of sample row `i` (zero-based)
pub fn sample_row(i: usize) -> Vec<String> {
    vec![
        (1000 + i).to_string(),
        format!("Élément {}", i + 1),
        if i % 2 == 1 { "Type A" } else { "Type B" }.to_string(),
        format!("2024-01-{:02}", i + 1),
        if i % 3 != 0 { "Actif" } else { "Inactif" }.to_string(),
        format!("{:.2}", (i + 1) as f64 * 100.5),
    ]
}

/// The ten-row table shown in the data tab
pub fn sample_grid() -> Grid {
    let rows = (0..SAMPLE_ROWS).map(sample_row).collect();
    Grid::from_rows(TABLE_HEADERS, rows).unwrap_or_else(|err| {
        error!(%err, "sample rows rejected, starting with an empty table");
        Grid::new(TABLE_HEADERS)
    })
}

/// Root folder with three categories of four files each
pub fn sample_tree() -> Hierarchy {
    let mut root = TreeNode::new("Racine", "Dossier", "---");
    for i in 1..=3 {
        let mut category = TreeNode::new(format!("Catégorie {i}"), "Dossier", (i * 10).to_string());
        for j in 1..=4 {
            category.push(TreeNode::new(
                format!("Élément {j}"),
                "Fichier",
                format!("{:.1}", j as f64 * 5.5),
            ));
        }
        root.push(category);
    }

    let mut tree = Hierarchy::new(TREE_HEADERS, vec![root]);
    tree.expand_all();
    tree
}

/// Lines present in the log viewer at startup, in `"[TAG] text"` form
pub const STARTUP_LOG: [&str; 3] = [
    "[INFO] Application démarrée",
    "[INFO] Interface utilisateur initialisée",
    "[ATTENTION] Configuration par défaut utilisée",
];

/// Entries of the list widget in the controls tab
pub fn list_options() -> Vec<String> {
    (1..=10).map(|i| format!("Option {i}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridView;

    #[test]
    fn test_sample_grid_shape() {
        let grid = sample_grid();
        assert_eq!(grid.row_count(), 10);
        assert_eq!(grid.column_count(), 6);
        assert_eq!(
            grid.row(0).unwrap(),
            &["1000", "Élément 1", "Type B", "2024-01-01", "Inactif", "100.50"]
        );
        assert_eq!(
            grid.row(9).unwrap(),
            &["1009", "Élément 10", "Type A", "2024-01-10", "Inactif", "1005.00"]
        );
    }

    #[test]
    fn test_sample_tree_shape() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 1 + 3 + 12);
        assert_eq!(tree.node(&[0, 2, 3]).unwrap().value, "22.0");
        assert_eq!(tree.node(&[0, 1]).unwrap().value, "20");
    }
}
