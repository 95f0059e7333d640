use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LedgerError;
use crate::player::Player;

/// Saved state of one player between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        PlayerRecord { id: player.id(), name: player.name().to_string(), balance: player.balance() }
    }
}

/// Player balances keyed by player id, stored as `id,name,balance` CSV rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    records: BTreeMap<Uuid, PlayerRecord>,
}

impl Ledger {
    /// Load a saved ledger. A missing file is a fresh ledger; a file that cannot be read is logged
    /// and also treated as fresh.
    pub fn load<P: AsRef<Path>>(path: P) -> Ledger {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ledger::default(),
            Err(e) => {
                warn!("Could not open {}: {}", path.display(), e);
                return Ledger::default();
            }
        };
        match Ledger::from_reader(file) {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!("Ignoring unreadable save file {}: {}", path.display(), e);
                Ledger::default()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LedgerError> {
        let file = File::create(path.as_ref())?;
        self.to_writer(file)?;
        info!("Saved {} player(s) to {}", self.records.len(), path.as_ref().display());
        Ok(())
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Ledger, LedgerError> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut records = BTreeMap::new();
        for row in reader.deserialize() {
            let record: PlayerRecord = row?;
            records.insert(record.id, record);
        }
        Ok(Ledger { records })
    }

    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<(), LedgerError> {
        let mut writer = csv::Writer::from_writer(writer);
        for record in self.records.values() {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&PlayerRecord> {
        self.records.get(id)
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&PlayerRecord> {
        self.records.values().find(|r| r.name == name)
    }

    /// Store the player's current balance, replacing any earlier record with the same id.
    pub fn record(&mut self, player: &Player) {
        self.records.insert(player.id(), PlayerRecord::from(player));
    }

    /// Seat a player by name: a returning player keeps their id and balance, anyone else starts
    /// fresh with `bankroll`.
    pub fn seat(&self, name: &str, bankroll: f64) -> Player {
        match self.lookup_by_name(name) {
            Some(r) => Player::with_id(&r.name, r.id, r.balance),
            None => Player::new(name, bankroll),
        }
    }
}
