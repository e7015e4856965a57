use std::collections::VecDeque;
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::hand::{Hand, HandEvaluation};
use crate::phase::Street;
use crate::player::{Action, Seat};

/// Number of narration lines kept by [`EventLog`]
pub const LOG_CAPACITY: usize = 20;

/// Bounded narration log: pushing past capacity evicts the oldest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    entries: VecDeque<String>,
    capacity: usize,
    pushed: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            pushed: 0,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.pushed += 1;
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lines pushed over the log's lifetime, including evicted ones.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Lines pushed after the first `seen` ones that are still retained.
    pub fn since(&self, seen: u64) -> impl Iterator<Item = &str> {
        let fresh = self.pushed.saturating_sub(seen).min(self.entries.len() as u64) as usize;
        self.entries
            .iter()
            .skip(self.entries.len() - fresh)
            .map(String::as_str)
    }
}

/// Records a single betting action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    pub street: Street,
    pub action: Action,
    /// Chips moved into the pot by this action
    pub amount: u32,
    /// Set when the opponent's requested action was replaced (e.g. unaffordable bet)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested: Option<Action>,
}

/// Records which hand positions a side replaced during the draw.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub seat: Seat,
    pub discarded: Vec<usize>,
}

/// How a round was decided.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resolution {
    Fold {
        folded: Seat,
    },
    Showdown {
        player: HandEvaluation,
        opponent: HandEvaluation,
    },
}

/// Result of a finished round: who won and how the pot was paid out.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// `None` on a split pot
    pub winner: Option<Seat>,
    pub pot: u32,
    pub player_payout: u32,
    pub opponent_payout: u32,
    pub resolution: Resolution,
}

/// Complete record of one round. Serialized to JSONL for round history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Sequence number of the round inside its session (1-based)
    pub round_no: u32,
    /// Session seed, when the session was seeded explicitly
    pub seed: Option<u64>,
    pub ante: u32,
    pub bet: u32,
    pub actions: Vec<ActionRecord>,
    pub draws: Vec<DrawRecord>,
    pub player_hand: Option<Hand>,
    pub opponent_hand: Option<Hand>,
    pub outcome: Option<RoundOutcome>,
    /// Stacks after payout: (player, opponent)
    pub chips_after: (u32, u32),
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`RoundRecord`]s to a JSON-lines file.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that numbers ids but writes nowhere.
    #[doc(hidden)]
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_evicts_oldest_first() {
        let mut log = EventLog::with_capacity(3);
        for i in 0..5 {
            log.push(format!("line {}", i));
        }
        assert_eq!(log.entries(), vec!["line 2", "line 3", "line 4"]);
        assert_eq!(log.last(), Some("line 4"));
    }

    #[test]
    fn default_capacity_is_twenty() {
        let mut log = EventLog::default();
        for i in 0..25 {
            log.push(i.to_string());
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.iter().next(), Some("5"));
    }

    #[test]
    fn since_returns_only_unseen_lines() {
        let mut log = EventLog::with_capacity(3);
        log.push("a");
        log.push("b");
        let seen = log.pushed();
        log.push("c");
        log.push("d");
        assert_eq!(log.since(seen).collect::<Vec<_>>(), vec!["c", "d"]);
        assert_eq!(log.since(0).count(), 3);
        assert_eq!(log.since(log.pushed()).count(), 0);
    }

    #[test]
    fn round_ids_are_zero_padded() {
        let mut logger = RoundLogger::with_seq_for_test("20261019");
        assert_eq!(logger.next_id(), "20261019-000001");
        assert_eq!(logger.next_id(), "20261019-000002");
    }
}
