//! Post-install and post-remove step sequences
//!
//! The flow after a package lands on disk:
//! 1. sync its `assets/` into the public tree (if it ships any)
//! 2. wipe the static-cache subtrees derived from that public content
//! 3. mirror addon `develop/` files into the project, never overwriting
//! 4. drop the access guard over `sally/`
//!
//! Every step is best-effort: a failing step logs one warning and the flow
//! moves on. Nothing here rolls back the package files themselves.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::InstallerConfig;
use crate::helpers::{copy, paths, remove};
use crate::output;
use crate::package::{Package, PackageType};

/// Content of the access guard written over the `sally/` tree.
const HTACCESS_GUARD: &str = "order deny,allow\ndeny from all";

const CACHE_VISIBILITIES: [&str; 2] = ["public", "protected"];
const CACHE_ENCODINGS: [&str; 3] = ["gzip", "plain", "deflate"];

/// Housekeeping after a package was installed or updated.
pub fn post_install(root: &Path, install_path: &Path, package: &Package, config: &InstallerConfig) {
    output::action(&format!("Installing {}", describe(package)));

    sync_assets(root, install_path, package);
    clear_static_cache(root, package);
    if package.kind == PackageType::Addon {
        mirror_develop_files(root, install_path, config);
    }
    write_access_guard(root);

    output::success(&format!("{} installed", package.name));
}

/// Teardown after a package was removed.
pub fn post_remove(root: &Path, package: &Package) {
    output::action(&format!("Removing {}", describe(package)));

    let public = public_dir(root, package);
    output::sub_action("drop public files");
    if let Err(err) = remove::remove_directory(&public, true) {
        output::warning(&format!("could not remove {}: {err}", public.display()));
    }
    clear_static_cache(root, package);

    output::success(&format!("{} removed", package.name));
}

/// `data/dyn/public/<name>` under the project root.
fn public_dir(root: &Path, package: &Package) -> PathBuf {
    root.join(paths::join(["data", "dyn", "public", package.name.as_str()]))
}

fn sync_assets(root: &Path, install_path: &Path, package: &Package) {
    let assets = install_path.join("assets");
    if !assets.is_dir() {
        return;
    }

    output::sub_action("sync assets");
    let public = public_dir(root, package);
    output::detail(&format!("refreshing {}", public.display()));

    // Stale content goes first so renamed or deleted assets do not linger.
    if let Err(err) = remove::erase_contents(&public, true) {
        output::warning(&format!("could not clear {}: {err}", public.display()));
    }
    if let Err(err) = copy::copy_tree(&assets, &public, true) {
        output::warning(&format!("could not copy assets: {err}"));
    }
}

/// Drop every static-cache subtree holding derived copies of this package's
/// public files.
fn clear_static_cache(root: &Path, package: &Package) {
    output::sub_action("clear static cache");
    for dir in cache_dirs(root, package) {
        if let Err(err) = remove::erase_contents(&dir, true) {
            output::warning(&format!("could not clear {}: {err}", dir.display()));
        }
    }
}

fn cache_dirs(root: &Path, package: &Package) -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(CACHE_VISIBILITIES.len() * CACHE_ENCODINGS.len());
    for visibility in CACHE_VISIBILITIES {
        for encoding in CACHE_ENCODINGS {
            dirs.push(root.join(paths::join([
                "data",
                "dyn",
                "public",
                "sally",
                "static-cache",
                visibility,
                encoding,
                "data",
                "dyn",
                "public",
                package.name.as_str(),
            ])));
        }
    }
    dirs
}

fn mirror_develop_files(root: &Path, install_path: &Path, config: &InstallerConfig) {
    if !config.install_develop_files {
        return;
    }
    let develop = install_path.join("develop");
    if !develop.is_dir() {
        return;
    }

    output::sub_action("mirror develop files");
    let target = root.join("develop");
    // Locally edited develop files win over the package's copies.
    if let Err(err) = copy::copy_tree(&develop, &target, false) {
        output::warning(&format!("could not mirror develop files: {err}"));
    }
}

/// Write the `.htaccess` guard over `sally/` once; an existing file is never
/// touched.
fn write_access_guard(root: &Path) {
    let guard = root.join("sally").join(".htaccess");
    if guard.exists() {
        return;
    }

    if let Some(parent) = guard.parent()
        && let Err(err) = copy::create_directory(parent)
    {
        output::warning(&format!("could not create {}: {err}", parent.display()));
        return;
    }

    if let Err(err) = fs::write(&guard, HTACCESS_GUARD) {
        output::warning(&format!("could not write {}: {err}", guard.display()));
    }
}

fn describe(package: &Package) -> String {
    match &package.version {
        Some(version) => format!("{} {version}", package.name),
        None => package.name.clone(),
    }
}
