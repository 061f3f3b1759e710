//! Duel between two decks, card against card until one side runs out

use tcg_battle::{resolve_attack, AttackOutcome, Fighter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One side's fighters, played in order
#[derive(Debug, Clone)]
pub struct Team {
    fighters: Vec<Fighter>,
    active: usize,
}

impl Team {
    pub fn new(fighters: Vec<Fighter>) -> Self {
        let mut team = Self { fighters, active: 0 };
        team.advance();
        team
    }

    /// Current fighter, `None` once everyone is knocked out
    pub fn active(&self) -> Option<&Fighter> {
        self.fighters.get(self.active)
    }

    fn active_mut(&mut self) -> Option<&mut Fighter> {
        self.fighters.get_mut(self.active)
    }

    /// Skip past knocked out fighters
    fn advance(&mut self) {
        while self
            .fighters
            .get(self.active)
            .is_some_and(Fighter::is_knocked_out)
        {
            self.active += 1;
        }
    }

    /// Fighters still standing
    pub fn remaining(&self) -> usize {
        self.fighters.iter().filter(|f| !f.is_knocked_out()).count()
    }

    pub fn is_defeated(&self) -> bool {
        self.active().is_none()
    }
}

/// An attack that happened during the duel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackRecord {
    pub round: u32,
    pub side: Side,
    pub attacker: String,
    pub defender: String,
    pub outcome: AttackOutcome,
    pub defender_hp: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelSummary {
    pub rounds: u32,
    /// `None` when the round cap was hit with both sides standing
    pub winner: Option<Side>,
    pub attacks: Vec<AttackRecord>,
}

#[derive(Debug, Clone)]
pub struct Duel {
    red: Team,
    blue: Team,
    round: u32,
}

impl Duel {
    pub fn new(red: Team, blue: Team) -> Self {
        Self {
            red,
            blue,
            round: 0,
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Red => &self.red,
            Side::Blue => &self.blue,
        }
    }

    pub fn is_over(&self) -> bool {
        self.red.is_defeated() || self.blue.is_defeated()
    }

    pub fn winner(&self) -> Option<Side> {
        match (self.red.is_defeated(), self.blue.is_defeated()) {
            (false, true) => Some(Side::Red),
            (true, false) => Some(Side::Blue),
            _ => None,
        }
    }

    /// Red attacks, then Blue answers if its active card survived.
    pub fn play_round(&mut self) -> Vec<AttackRecord> {
        let mut records = Vec::new();
        if self.is_over() {
            return records;
        }
        self.round += 1;

        let red_hit = strike(&self.red, &mut self.blue, Side::Red, self.round);
        let blue_knocked_out = red_hit.as_ref().is_some_and(|r| r.outcome.knocked_out);
        records.extend(red_hit);

        if !blue_knocked_out {
            records.extend(strike(&self.blue, &mut self.red, Side::Blue, self.round));
        }

        self.red.advance();
        self.blue.advance();
        records
    }

    /// Play until one side is defeated or `max_rounds` have been played
    pub fn run(&mut self, max_rounds: u32) -> DuelSummary {
        let mut attacks = Vec::new();
        while !self.is_over() && self.round < max_rounds {
            attacks.extend(self.play_round());
        }

        let winner = self.winner();
        tracing::info!(rounds = self.round, winner = ?winner, "duel finished");

        DuelSummary {
            rounds: self.round,
            winner,
            attacks,
        }
    }
}

fn strike(attacking: &Team, defending: &mut Team, side: Side, round: u32) -> Option<AttackRecord> {
    let attacker = attacking.active()?;
    let defender = defending.active_mut()?;

    match resolve_attack(attacker, defender) {
        Ok(outcome) => Some(AttackRecord {
            round,
            side,
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            outcome,
            defender_hp: defender.hp_current,
        }),
        Err(e) => {
            tracing::warn!(%e, "attack skipped");
            None
        }
    }
}
