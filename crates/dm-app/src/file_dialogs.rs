//! Native file pickers
//!
//! Nothing is read or written: the chosen path is only handed back so the
//! session can echo it into the log.

use std::path::PathBuf;

/// "Ouvrir un fichier", any file type
pub fn pick_open_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Ouvrir un fichier")
        .pick_file()
}

/// "Sauvegarder", data files
pub fn pick_save_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Sauvegarder")
        .add_filter("Fichiers de données", &["dat"])
        .save_file()
}

/// "Sauvegarder Log", text files
pub fn pick_log_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Sauvegarder Log")
        .add_filter("Fichiers texte", &["log", "txt"])
        .set_file_name("journal.log")
        .save_file()
}
