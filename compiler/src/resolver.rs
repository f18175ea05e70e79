use std::collections::HashSet;

use crate::{
    error::MavgenError,
    fetch::is_remote_address,
    parser::parse_definition,
    traits::Fetch,
    types::Definition,
    utils::{address_dir, address_name},
};

/// Collects a definition and everything it includes, transitively.
///
/// A resolver is good for one run: the set of visited addresses and the
/// output list live inside it and are handed back by [`Resolver::resolve`].
pub struct Resolver<F: Fetch> {
    fetcher:     F,
    is_remote:   bool,
    processed:   HashSet<String>,
    definitions: Vec<Definition>,
}

impl<F: Fetch> Resolver<F> {
    /// `is_remote` selects how include paths are turned into addresses:
    /// remote includes are appended to the directory of their parent URL,
    /// local includes are used verbatim.
    pub fn new(fetcher: F, is_remote: bool) -> Self {
        Self {
            fetcher,
            is_remote,
            processed: HashSet::new(),
            definitions: Vec::new(),
        }
    }

    /// Returns the definitions in post order: every definition comes after
    /// all of the definitions it includes.
    pub fn resolve(mut self, root: &str) -> Result<Vec<Definition>, MavgenError> {
        self.visit(root)?;
        Ok(self.definitions)
    }

    fn visit(&mut self, address: &str) -> Result<(), MavgenError> {
        if !self.processed.insert(address.to_string()) {
            tracing::debug!("skipping {}, already processed", address);
            return Ok(());
        }

        tracing::info!("parsing {}...", address);

        let content = self.fetcher.fetch(address)?;
        let mut definition = parse_definition(&content).map_err(|e| e.in_document(address))?;
        definition.address = address.to_string();
        definition.name = address_name(address).to_string();

        for include in &definition.includes {
            let child = self.include_address(address, include);
            tracing::debug!("{} includes {}", address, child);
            self.visit(&child)?;
        }

        self.definitions.push(definition);
        Ok(())
    }

    fn include_address(&self, parent: &str, include: &str) -> String {
        if self.is_remote {
            format!("{}{}", address_dir(parent), include)
        } else {
            include.to_string()
        }
    }
}

/// Resolves `root` with a fresh [`Resolver`], detecting whether it is remote.
pub fn resolve_definitions<F: Fetch>(root: &str, fetcher: F) -> Result<Vec<Definition>, MavgenError> {
    Resolver::new(fetcher, is_remote_address(root)).resolve(root)
}
