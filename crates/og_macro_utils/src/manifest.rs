use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for an `og_*` crate as seen from the
/// caller's Cargo.toml.
///
/// Generated code must name `og_reflect` through whichever dependency the
/// invoking crate actually declares.
///
/// # Example
///
/// ```rust
/// # use og_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("og_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `og_` and the caller depends on
///    the umbrella crate `objgraph`, return `::objgraph::short_name`
///    (e.g. `og_reflect` -> `::objgraph::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A crate that refers to itself through generated code should declare
/// `extern crate self as og_reflect;` in its root.
#[derive(Debug)]
pub struct Manifest {
    manifest: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const UMBRELLA_NAME: &str = "objgraph";
const CRATE_PREFIX: &str = "og_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }

    fn read(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(text).ok()
    }

    fn absolute(name: &str) -> syn::Path {
        let ident = syn::Ident::new(name, proc_macro2_span());
        let mut path = syn::Path::from(ident);
        path.leading_colon = Some(Default::default());
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(name));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(UMBRELLA_NAME) {
            let mut path = Self::absolute(UMBRELLA_NAME);
            path.segments
                .push(syn::Ident::new(module, proc_macro2_span()).into());
            return Some(path);
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// the caller's Cargo.toml. See the type-level docs for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(manifest) = &self.manifest else {
            return Self::absolute(name);
        };

        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = manifest.get(table)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        Self::absolute(name)
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Parsed manifests are cached per path and re-read only when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::modified_time(&path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[inline]
fn proc_macro2_span() -> Span {
    Span::call_site()
}
