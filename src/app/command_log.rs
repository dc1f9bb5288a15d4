//! Verlauf der ausgeführten Commands einer Session (Ringpuffer).

use super::AppCommand;
use std::collections::VecDeque;

/// Standard-Kapazität des Verlaufs.
pub const COMMAND_LOG_CAPACITY: usize = 1000;

/// Ringpuffer über die zuletzt ausgeführten Commands, älteste zuerst.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl CommandLog {
    /// Leerer Verlauf mit `COMMAND_LOG_CAPACITY` Plätzen.
    pub fn new() -> Self {
        Self::with_capacity(COMMAND_LOG_CAPACITY)
    }

    /// Leerer Verlauf mit eigener Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(COMMAND_LOG_CAPACITY)),
            capacity,
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
