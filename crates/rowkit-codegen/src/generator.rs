use crate::{
    diagnostic::Log,
    expand::{self, GeneratedUnit},
    schema::{self, Declaration},
    Config, Diagnostic, Error, Result,
};

use indexmap::IndexMap;
use std::{fs, path::Path};
use syn::ext::IdentExt;
use tracing::debug;

/// Scans a project for record declarations and writes their generated code.
#[derive(Debug, Default)]
pub struct Generator {
    config: Config,
    log: Log,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            log: Log::default(),
        }
    }

    /// Route diagnostics to `sink`. Without a sink they are dropped.
    pub fn log(mut self, sink: impl FnMut(&Diagnostic) + 'static) -> Self {
        self.log = Log::new(sink);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the struct `type_name` declared in `source`.
    pub fn parse_struct(&mut self, type_name: &str, source: &Path) -> Result<Declaration> {
        if type_name.is_empty() {
            return Err(Error::parse_failed(source, "empty type name"));
        }

        if source.as_os_str().is_empty() {
            return Err(Error::parse_failed(source, "empty source path"));
        }

        let file = read_file(source)?;
        Declaration::from_file(&file, type_name, source, &mut self.log)
    }

    /// Attaches one-to-many relations to the child declarations in `decls`.
    pub fn resolve_relations(&mut self, decls: &mut IndexMap<String, Declaration>) {
        schema::resolve_relations(decls, &mut self.log);
    }

    /// Parses one struct and writes a unit holding only its code. A struct
    /// without mapped fields produces nothing.
    pub fn generate_for_struct(
        &mut self,
        type_name: &str,
        source: &Path,
    ) -> Result<Option<GeneratedUnit>> {
        let decl = self.parse_struct(type_name, source)?;

        if decl.fields.is_empty() {
            return Ok(None);
        }

        self.generate_for_file(&[&decl], source)
    }

    /// Emits and writes the unit for `decls`, all declared in `source`.
    pub fn generate_for_file(
        &mut self,
        decls: &[&Declaration],
        source: &Path,
    ) -> Result<Option<GeneratedUnit>> {
        let Some(unit) = expand::emit(decls, source)? else {
            return Ok(None);
        };

        debug!("Writing {}", unit.path.display());
        unit.write()?;

        Ok(Some(unit))
    }

    /// Scans the root directory and regenerates every unit.
    pub fn run(&mut self) -> Result<()> {
        for unit in self.generate()? {
            debug!("Writing {}", unit.path.display());
            unit.write()?;
        }

        Ok(())
    }

    /// Scans the root directory and returns every unit without writing it,
    /// one per source file in discovery order. Build scripts use this to
    /// place the output somewhere other than beside the sources.
    pub fn generate(&mut self) -> Result<Vec<GeneratedUnit>> {
        let root = self.config.root_dir.clone();

        let mut decls = IndexMap::new();
        self.collect(&root, &mut decls)?;

        if decls.is_empty() {
            return Err(Error::no_models(&root));
        }

        self.resolve_relations(&mut decls);

        let mut by_file: IndexMap<&Path, Vec<&Declaration>> = IndexMap::new();
        for decl in decls.values() {
            by_file.entry(decl.source.as_path()).or_default().push(decl);
        }

        let mut units = vec![];
        for (source, decls) in by_file {
            units.extend(expand::emit(&decls, source)?);
        }

        Ok(units)
    }

    fn collect(&mut self, dir: &Path, decls: &mut IndexMap<String, Declaration>) -> Result<()> {
        let mut entries = vec![];
        for entry in fs::read_dir(dir).map_err(|err| Error::io(dir, err))? {
            let entry = entry.map_err(|err| Error::io(dir, err))?;
            let file_type = entry.file_type().map_err(|err| Error::io(&entry.path(), err))?;
            entries.push((entry.file_name(), entry.path(), file_type));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, path, file_type) in entries {
            let name = name.to_string_lossy();

            if file_type.is_dir() {
                if !self.config.is_skipped(&name) {
                    self.collect(&path, decls)?;
                }
            } else if file_type.is_file() && self.config.is_model_file(&name) {
                self.collect_file(&path, decls);
            }
        }

        Ok(())
    }

    fn collect_file(&mut self, path: &Path, decls: &mut IndexMap<String, Declaration>) {
        debug!("Scanning {}", path.display());

        let file = match read_file(path) {
            Ok(file) => file,
            Err(err) => {
                self.log.error(Some(path), format!("skipping file: {err}"));
                return;
            }
        };

        let mut found = 0;

        for item in &file.items {
            let syn::Item::Struct(item) = item else {
                continue;
            };

            if !is_record_shaped(item) {
                continue;
            }

            let name = item.ident.unraw().to_string();

            let decl = match Declaration::from_item(&file.items, item, path, &mut self.log) {
                Ok(decl) => decl,
                Err(err) => {
                    self.log.error(Some(path), format!("skipping `{name}`: {err}"));
                    continue;
                }
            };

            if decl.fields.is_empty() {
                self.log
                    .warn(Some(path), format!("skipping `{name}`: no mappable fields"));
                continue;
            }

            if let Some(first) = decls.get(&name) {
                let message = format!(
                    "skipping `{name}`: already declared in {}",
                    first.source.display()
                );
                self.log.warn(Some(path), message);
                continue;
            }

            decls.insert(name, decl);
            found += 1;
        }

        if found == 0 {
            self.log.warn(Some(path), "no mappable declarations");
        }
    }
}

/// Only structs with named fields and no generic parameters are candidates
/// for a directory scan; unit and tuple structs are passed over silently.
fn is_record_shaped(item: &syn::ItemStruct) -> bool {
    matches!(item.fields, syn::Fields::Named(_)) && item.generics.params.is_empty()
}

fn read_file(path: &Path) -> Result<syn::File> {
    let src = fs::read_to_string(path).map_err(|err| Error::parse_failed(path, err.to_string()))?;
    syn::parse_file(&src).map_err(|err| Error::syntax(path, err))
}
