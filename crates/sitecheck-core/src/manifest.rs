//! Fixed inventory of the site: the pages scanned for links and the files
//! every deployment must ship.

/// Default document looked up when a link target names a directory.
pub const DEFAULT_INDEX: &str = "index.html";

/// HTML pages scanned by the link validator, relative to the site root.
pub const SITE_PAGES: &[&str] = &[
    "index.html",
    "products.html",
    "manuals.html",
    "qbitconnect.html",
    "transmissionconnect.html",
    "plexconnect.html",
    "jellyfinconnect.html",
    "embyconnect.html",
    "jdownloaderconnect.html",
    "ytdlpconnect.html",
    "metubeconnect.html",
    "nextcloudconnect.html",
    "seafileconnect.html",
    "filebrowserconnect.html",
    "syncthingconnect.html",
    "matrixconnect.html",
    "paperlessngconnect.html",
    "duplicaticonnect.html",
    "wireguardconnect.html",
    "minecraftserverconnect.html",
    "onlyofficeconnect.html",
    "shareconnector.html",
];

/// Shared assets that must ship alongside the pages.
pub const SITE_ASSETS: &[&str] = &["styles.css", "script.js"];

/// Every file the deployed site must contain: all pages plus shared assets.
pub fn required_files() -> Vec<&'static str> {
    let mut files = Vec::with_capacity(SITE_PAGES.len() + SITE_ASSETS.len());
    files.extend_from_slice(SITE_PAGES);
    files.extend_from_slice(SITE_ASSETS);
    files
}
