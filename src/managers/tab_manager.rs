use log::info;
use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabSummary};

/// Trait defining the tab host interface.
pub trait TabManagerTrait<S> {
    fn add_tab(&mut self, surface: S, label: &str, address: &str) -> String;
    fn remove_tab(&mut self, index: usize) -> Result<Tab<S>, TabError>;
    fn select_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn get_tab(&self, index: usize) -> Option<&Tab<S>>;
    fn get_tab_mut(&mut self, index: usize) -> Option<&mut Tab<S>>;
    fn get_active_tab(&self) -> Option<&Tab<S>>;
    fn get_active_tab_mut(&mut self) -> Option<&mut Tab<S>>;
    fn active_index(&self) -> Option<usize>;
    fn index_of(&self, tab_id: &str) -> Option<usize>;
    fn tab_count(&self) -> usize;
    fn summaries(&self) -> Vec<TabSummary>;
}

/// Ordered collection of tabs with one active tab.
///
/// Tabs are addressed by position, the way the tab strip shows them.
/// Keeping at least one tab alive is the window's job: it owns the
/// surface factory needed to open a replacement.
#[derive(Debug)]
pub struct TabManager<S> {
    tabs: Vec<Tab<S>>,
    active: Option<usize>,
}

impl<S> TabManager<S> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab<S>> {
        self.tabs.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), TabError> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(TabError::InvalidIndex(index))
        }
    }
}

impl<S> Default for TabManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TabManagerTrait<S> for TabManager<S> {
    /// Append a tab and make it active. Returns the new tab's ID.
    fn add_tab(&mut self, surface: S, label: &str, address: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.tabs.push(Tab {
            id: id.clone(),
            label: label.to_string(),
            address: address.to_string(),
            surface,
        });
        self.active = Some(self.tabs.len() - 1);
        info!("opened tab {} ({} open)", id, self.tabs.len());
        id
    }

    /// Remove the tab at `index` and hand it back.
    /// If it was active, the tab to its right (or the new last tab) takes over.
    fn remove_tab(&mut self, index: usize) -> Result<Tab<S>, TabError> {
        self.check_index(index)?;
        let tab = self.tabs.remove(index);

        self.active = match self.active {
            _ if self.tabs.is_empty() => None,
            Some(active) if active == index => Some(index.min(self.tabs.len() - 1)),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };

        info!("closed tab {} ({} open)", tab.id, self.tabs.len());
        Ok(tab)
    }

    fn select_tab(&mut self, index: usize) -> Result<(), TabError> {
        self.check_index(index)?;
        self.active = Some(index);
        Ok(())
    }

    fn get_tab(&self, index: usize) -> Option<&Tab<S>> {
        self.tabs.get(index)
    }

    fn get_tab_mut(&mut self, index: usize) -> Option<&mut Tab<S>> {
        self.tabs.get_mut(index)
    }

    fn get_active_tab(&self) -> Option<&Tab<S>> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    fn get_active_tab_mut(&mut self) -> Option<&mut Tab<S>> {
        self.active.and_then(|i| self.tabs.get_mut(i))
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn index_of(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn summaries(&self) -> Vec<TabSummary> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(i, t)| TabSummary {
                id: t.id.clone(),
                label: t.label.clone(),
                address: t.address.clone(),
                active: self.active == Some(i),
            })
            .collect()
    }
}
