use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Save-file format version for serialized brackets.
pub const BRACKET_FORMAT: u32 = 1;

#[derive(Debug, Error)]
pub enum BracketError {
    #[error("no players")]
    NoPlayers,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Slot<P> {
    Player(P),
    Bye,
}

impl<P> Slot<P> {
    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    pub fn player(&self) -> Option<&P> {
        match self {
            Slot::Player(player) => Some(player),
            Slot::Bye => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Pairing<P> {
    pub left: Slot<P>,
    pub right: Slot<P>,
}

impl<P: PartialEq> Pairing<P> {
    pub fn contains(&self, player: &P) -> bool {
        self.left.player() == Some(player) || self.right.player() == Some(player)
    }

    pub fn opponent_of(&self, player: &P) -> Option<&Slot<P>> {
        if self.left.player() == Some(player) {
            Some(&self.right)
        } else if self.right.player() == Some(player) {
            Some(&self.left)
        } else {
            None
        }
    }
}

/// Render-facing slot: unreached layers and unresolved matches show as
/// `Undecided`, distinct from a bye.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenderSlot<P> {
    Player(P),
    Bye,
    Undecided,
}

impl<P: Clone> RenderSlot<P> {
    fn from_slot(slot: &Slot<P>) -> Self {
        match slot {
            Slot::Player(player) => RenderSlot::Player(player.clone()),
            Slot::Bye => RenderSlot::Bye,
        }
    }
}

/// Single-elimination bracket over a bye-padded power-of-two field.
///
/// Plain serializable data: sealed rounds, the current round's pairings, and
/// the winners recorded so far for it. All mutation goes through
/// `declare_winner`/`declare_loser`, which report business failures (unknown
/// player, already-decided match, finished bracket) as `false` and never
/// panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bracket<P> {
    format: u32,
    depth: usize,
    rounds: Vec<Vec<Pairing<P>>>,
    current: Vec<Pairing<P>>,
    advancing: Vec<Option<Slot<P>>>,
    champion: Option<P>,
}

impl<P: Clone + PartialEq> Bracket<P> {
    /// Pads the field to the next power of two by slotting a bye after each
    /// of the first `padding` players, so round 1 byes are spread out rather
    /// than stacked at the bottom. Bye matches resolve before this returns.
    pub fn new(players: Vec<P>) -> Result<Self, BracketError> {
        if players.is_empty() {
            return Err(BracketError::NoPlayers);
        }
        if players.len() == 1 {
            return Ok(Self {
                format: BRACKET_FORMAT,
                depth: 0,
                rounds: Vec::new(),
                current: Vec::new(),
                advancing: Vec::new(),
                champion: players.into_iter().next(),
            });
        }

        let padded = players.len().next_power_of_two();
        let mut padding = padded - players.len();
        let mut slots = Vec::with_capacity(padded);
        for player in players {
            slots.push(Slot::Player(player));
            if padding > 0 {
                slots.push(Slot::Bye);
                padding -= 1;
            }
        }

        let current = pair_up(slots);
        let advancing = vec![None; current.len()];
        let mut bracket = Self {
            format: BRACKET_FORMAT,
            depth: padded.trailing_zeros() as usize,
            rounds: Vec::new(),
            current,
            advancing,
            champion: None,
        };
        bracket.resolve_byes();
        bracket.try_seal();
        Ok(bracket)
    }

    /// Record `player` as the winner of their current-round match. Returns
    /// `false` without mutating when the bracket is finished, the player is
    /// not in an undecided match, or the match was already resolved.
    pub fn declare_winner(&mut self, player: &P) -> bool {
        if self.champion.is_some() {
            return false;
        }
        let Some(idx) = self.current.iter().position(|pairing| pairing.contains(player)) else {
            return false;
        };
        if self.advancing[idx].is_some() {
            return false;
        }
        self.advancing[idx] = Some(Slot::Player(player.clone()));
        self.try_seal();
        true
    }

    /// Forfeit path: the opponent of `player` advances. Fails under the same
    /// conditions as `declare_winner`, so a match already resolved from the
    /// winner's side cannot be resolved again from the loser's.
    pub fn declare_loser(&mut self, player: &P) -> bool {
        if self.champion.is_some() {
            return false;
        }
        let Some(idx) = self.current.iter().position(|pairing| pairing.contains(player)) else {
            return false;
        };
        if self.advancing[idx].is_some() {
            return false;
        }
        let Some(winner) = self.current[idx].opponent_of(player).cloned() else {
            return false;
        };
        if winner.is_bye() {
            return false;
        }
        self.advancing[idx] = Some(winner);
        self.try_seal();
        true
    }

    pub fn is_complete(&self) -> bool {
        self.champion.is_some()
    }

    pub fn champion(&self) -> Option<&P> {
        self.champion.as_ref()
    }

    /// Undecided pairings of the current round, for display.
    pub fn current_matches(&self) -> Vec<&Pairing<P>> {
        self.current
            .iter()
            .zip(&self.advancing)
            .filter(|(_, advancing)| advancing.is_none())
            .map(|(pairing, _)| pairing)
            .collect()
    }

    /// 1-based round counter for captions.
    pub fn round_number(&self) -> usize {
        self.rounds.len() + 1
    }

    /// Number of layers `render_layers` produces, champion layer included.
    pub fn layer_count(&self) -> usize {
        self.depth + 1
    }

    pub fn format(&self) -> u32 {
        self.format
    }

    /// Layered view for renderers: layer `i` always holds exactly
    /// `2^(depth - i)` slots, from round 1 down to the single champion slot,
    /// with `Undecided` filling everything not yet reached. Widths are fixed
    /// at construction so a renderer can lay out its grid up front.
    pub fn render_layers(&self) -> Vec<Vec<RenderSlot<P>>> {
        let mut layers = Vec::with_capacity(self.depth + 1);
        for level in 0..self.depth {
            let layer = if level < self.rounds.len() {
                flatten(&self.rounds[level])
            } else if level == self.rounds.len() && !self.current.is_empty() {
                flatten(&self.current)
            } else {
                vec![RenderSlot::Undecided; 1 << (self.depth - level)]
            };
            layers.push(layer);
        }
        layers.push(match &self.champion {
            Some(player) => vec![RenderSlot::Player(player.clone())],
            None => vec![RenderSlot::Undecided],
        });
        layers
    }

    fn resolve_byes(&mut self) {
        for (pairing, advancing) in self.current.iter().zip(self.advancing.iter_mut()) {
            if advancing.is_some() {
                continue;
            }
            match (&pairing.left, &pairing.right) {
                (Slot::Player(_), Slot::Bye) => *advancing = Some(pairing.left.clone()),
                (Slot::Bye, Slot::Player(_)) => *advancing = Some(pairing.right.clone()),
                _ => {}
            }
        }
    }

    /// Once every match of the round has a winner, seal it into history and
    /// halve into the next round, or crown the champion when one slot is
    /// left. Winners are always real players since bye matches never reach a
    /// later round.
    fn try_seal(&mut self) {
        if self.current.is_empty() || self.advancing.iter().any(|slot| slot.is_none()) {
            return;
        }
        let winners: Vec<Slot<P>> = self.advancing.drain(..).flatten().collect();
        self.rounds.push(std::mem::take(&mut self.current));
        if winners.len() == 1 {
            if let Some(Slot::Player(player)) = winners.into_iter().next() {
                self.champion = Some(player);
            }
            return;
        }
        self.current = pair_up(winners);
        self.advancing = vec![None; self.current.len()];
    }
}

fn flatten<P: Clone>(pairings: &[Pairing<P>]) -> Vec<RenderSlot<P>> {
    pairings
        .iter()
        .flat_map(|pairing| {
            [
                RenderSlot::from_slot(&pairing.left),
                RenderSlot::from_slot(&pairing.right),
            ]
        })
        .collect()
}

fn pair_up<P>(slots: Vec<Slot<P>>) -> Vec<Pairing<P>> {
    let mut pairings = Vec::with_capacity(slots.len() / 2);
    let mut slots = slots.into_iter();
    while let (Some(left), Some(right)) = (slots.next(), slots.next()) {
        pairings.push(Pairing { left, right });
    }
    pairings
}
