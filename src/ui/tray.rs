//! System tray icon management.
//!
//! Manages the colour picker's tray icon, tooltip, and context menu.

use crate::picker::MenuAction;
use std::sync::mpsc::{channel, Receiver, Sender};
use thiserror::Error;
use tray_icon::{
    menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem},
    Icon, TrayIcon, TrayIconBuilder,
};

/// Events from the system tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// Menu item selected
    MenuItemClicked { action: MenuAction },
}

/// Tray service error types.
#[derive(Debug, Error)]
pub enum TrayError {
    #[error("Failed to create tray icon: {0}")]
    CreateFailed(String),

    #[error("Tray icon not initialized")]
    NotInitialized,

    #[error("Failed to create menu: {0}")]
    MenuFailed(String),

    #[error("Failed to update tooltip: {0}")]
    TooltipFailed(String),
}

/// Find the action bound to a menu item id.
fn action_for(menu_ids: &[(MenuId, MenuAction)], id: &MenuId) -> Option<MenuAction> {
    menu_ids
        .iter()
        .find(|(item_id, _)| item_id == id)
        .map(|(_, action)| *action)
}

/// System tray manager.
pub struct TrayManager {
    tray_icon: Option<TrayIcon>,
    event_sender: Sender<TrayEvent>,
    event_receiver: Receiver<TrayEvent>,
    menu_sender: Sender<MenuEvent>,
    menu_receiver: Receiver<MenuEvent>,
    menu_ids: Vec<(MenuId, MenuAction)>,
}

impl TrayManager {
    /// Create a new TrayManager.
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        let (menu_sender, menu_receiver) = channel();
        Self {
            tray_icon: None,
            event_sender: sender,
            event_receiver: receiver,
            menu_sender,
            menu_receiver,
            menu_ids: Vec::new(),
        }
    }

    /// Create and show the tray icon with the Hex / RGB / About / Quit menu.
    pub fn create(&mut self, icon: Icon, tooltip: &str) -> Result<(), TrayError> {
        let menu = Menu::new();
        self.menu_ids.clear();

        for action in MenuAction::ALL {
            // Keep Quit apart from the actions
            if action == MenuAction::Quit {
                menu.append(&PredefinedMenuItem::separator())
                    .map_err(|e| TrayError::MenuFailed(e.to_string()))?;
            }

            let item = MenuItem::new(action.label(), true, None);
            self.menu_ids.push((item.id().clone(), action));
            menu.append(&item)
                .map_err(|e| TrayError::MenuFailed(e.to_string()))?;
        }

        let tray_icon = TrayIconBuilder::new()
            .with_icon(icon)
            .with_tooltip(tooltip)
            .with_menu(Box::new(menu))
            .build()
            .map_err(|e| TrayError::CreateFailed(e.to_string()))?;

        self.tray_icon = Some(tray_icon);
        tracing::info!("Tray icon created");

        Ok(())
    }

    /// Route menu clicks through this manager and call `wake` after each one.
    ///
    /// Menu clicks only reach [`TrayManager::process_events`] once this has
    /// been called. The handler is global and can be installed once per
    /// process. `wake` runs on whichever thread the toolkit delivers menu
    /// events on.
    pub fn forward_menu_events<F>(&self, wake: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let sender = self.menu_sender.clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            let _ = sender.send(event);
            wake();
        }));
    }

    /// Process pending menu events. Call this from the event loop.
    pub fn process_events(&self) {
        for event in self.menu_receiver.try_iter() {
            match action_for(&self.menu_ids, &event.id) {
                Some(action) => {
                    let _ = self
                        .event_sender
                        .send(TrayEvent::MenuItemClicked { action });
                }
                None => tracing::debug!(id = ?event.id, "Ignoring unknown menu item"),
            }
        }
    }

    /// Get the event receiver for tray events.
    pub fn events(&self) -> &Receiver<TrayEvent> {
        &self.event_receiver
    }

    /// Update the tooltip text.
    pub fn set_tooltip(&mut self, text: &str) -> Result<(), TrayError> {
        let tray = self.tray_icon.as_mut().ok_or(TrayError::NotInitialized)?;
        tray.set_tooltip(Some(text))
            .map_err(|e| TrayError::TooltipFailed(e.to_string()))?;
        Ok(())
    }

    /// Destroy the tray icon.
    pub fn destroy(&mut self) -> Result<(), TrayError> {
        self.tray_icon = None;
        Ok(())
    }
}

impl Default for TrayManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_lookup() {
        let ids = vec![
            (MenuId::new("hex"), MenuAction::Hex),
            (MenuId::new("rgb"), MenuAction::Rgb),
            (MenuId::new("quit"), MenuAction::Quit),
        ];

        assert_eq!(action_for(&ids, &MenuId::new("rgb")), Some(MenuAction::Rgb));
        assert_eq!(action_for(&ids, &MenuId::new("quit")), Some(MenuAction::Quit));
        assert_eq!(action_for(&ids, &MenuId::new("other")), None);
    }

    #[test]
    fn test_tooltip_without_icon() {
        let mut tray = TrayManager::new();
        assert!(matches!(
            tray.set_tooltip("Pigment Picker"),
            Err(TrayError::NotInitialized)
        ));
    }

    #[test]
    fn test_tooltip_error_message() {
        let err = TrayError::TooltipFailed("shell refused".to_string());
        assert_eq!(err.to_string(), "Failed to update tooltip: shell refused");
    }

    #[test]
    fn test_forwarded_events_become_actions() {
        let mut tray = TrayManager::new();
        tray.menu_ids = vec![(MenuId::new("rgb"), MenuAction::Rgb)];
        tray.menu_sender.send(MenuEvent { id: MenuId::new("rgb") }).unwrap();
        tray.menu_sender.send(MenuEvent { id: MenuId::new("other") }).unwrap();

        tray.process_events();
        let events: Vec<TrayEvent> = tray.events().try_iter().collect();
        assert_eq!(events, vec![TrayEvent::MenuItemClicked { action: MenuAction::Rgb }]);
    }
}
