//! The turn-loop session state machine.
//!
//! A `GameSession` cycles through participants: each turn awaits a roll
//! command, then a guess. A correct guess solves the mystery; a wrong or
//! malformed guess passes the turn to the next participant. Input that
//! is not a roll command costs nothing — the same participant is asked
//! again.

use rand::SeedableRng;
use rand::rngs::StdRng;

use vd_core::{Entity, Participant, standard_chambers, standard_hideouts, standard_participants};

use crate::clues::deal_clues;
use crate::config::GameConfig;
use crate::dice::Die;
use crate::error::GameResult;
use crate::guess::Guess;
use crate::secret::SecretCombination;

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the current participant to type the roll command.
    AwaitingRoll,
    /// Die rolled; waiting for the current participant's guess.
    AwaitingGuess,
    /// The mystery has been solved. Terminal.
    Solved,
}

/// A single game: catalogs, participants, the hidden secret, and the
/// turn state. All randomness comes from the config seed.
#[derive(Debug)]
pub struct GameSession {
    participants: Vec<Participant>,
    hideouts: Vec<Entity>,
    chambers: Vec<Entity>,
    secret: SecretCombination,
    die: Die,
    turn: usize,
    phase: TurnPhase,
    rng: StdRng,
}

impl GameSession {
    /// Start a game with the standard catalogs.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        Self::with_catalogs(
            config,
            standard_participants(),
            standard_hideouts(),
            standard_chambers(),
        )
    }

    /// Start a game with custom catalogs.
    ///
    /// Selects the secret, then deals clues — in that order, since the
    /// dealer must know which names to withhold. Empty catalogs are
    /// rejected here rather than misbehaving later.
    pub fn with_catalogs(
        config: GameConfig,
        mut participants: Vec<Participant>,
        hideouts: Vec<Entity>,
        chambers: Vec<Entity>,
    ) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let secret = SecretCombination::select(&participants, &hideouts, &chambers, &mut rng)?;
        deal_clues(
            &mut participants,
            &hideouts,
            &chambers,
            &secret,
            config.clues_per_participant,
            &mut rng,
        );

        Ok(Self {
            participants,
            hideouts,
            chambers,
            secret,
            die: config.die,
            turn: 0,
            phase: TurnPhase::AwaitingRoll,
            rng,
        })
    }

    /// The current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether the mystery has been solved.
    pub fn is_solved(&self) -> bool {
        self.phase == TurnPhase::Solved
    }

    /// The participant whose turn it is.
    pub fn current_participant(&self) -> &Participant {
        &self.participants[self.turn]
    }

    /// All participants, in catalog order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The hideout catalog.
    pub fn hideouts(&self) -> &[Entity] {
        &self.hideouts
    }

    /// The chamber catalog.
    pub fn chambers(&self) -> &[Entity] {
        &self.chambers
    }

    /// Render a participant's clue sheet, or `None` for an unknown name.
    pub fn clue_sheet(&self, name: &str) -> Option<String> {
        let participant = self.participants.iter().find(|p| p.name == name)?;
        let mut out = format!("Clues for {}:", participant.name);
        if participant.clues.is_empty() {
            out.push_str("\n  (none)");
        } else {
            for (i, clue) in participant.clues.iter().enumerate() {
                out.push_str(&format!("\n  {}. {clue}", i + 1));
            }
        }
        Some(out)
    }

    /// The prompt to show before reading the next line of input.
    pub fn prompt(&self) -> String {
        match self.phase {
            TurnPhase::AwaitingRoll => format!(
                "{}'s turn. Type 'roll' to roll the die:",
                self.current_participant().name
            ),
            TurnPhase::AwaitingGuess => {
                "Make your guess (format: Participant,Hideout,Chamber):".to_string()
            }
            TurnPhase::Solved => "The mystery is solved.".to_string(),
        }
    }

    /// Feed one line of input to the session and get the response.
    ///
    /// An empty response means there is nothing to say — notably after a
    /// malformed guess, which silently passes the turn.
    pub fn process(&mut self, input: &str) -> String {
        match self.phase {
            TurnPhase::AwaitingRoll => {
                if input.eq_ignore_ascii_case("roll") {
                    let value = self.die.roll(&mut self.rng);
                    self.phase = TurnPhase::AwaitingGuess;
                    format!("You rolled a {value}.")
                } else {
                    // Not a roll command: no turn consumed, ask again.
                    "Unknown command. Type 'roll' to roll the die.".to_string()
                }
            }
            TurnPhase::AwaitingGuess => match Guess::parse(input) {
                Some(guess) if self.secret.matches(&guess) => {
                    let name = self.current_participant().name.clone();
                    self.phase = TurnPhase::Solved;
                    format!("Congratulations {name}! You solved the mystery!")
                }
                Some(_) => {
                    self.advance_turn();
                    "Wrong guess. Try again.".to_string()
                }
                None => {
                    // Malformed guess: skip evaluation, pass the turn.
                    self.advance_turn();
                    String::new()
                }
            },
            TurnPhase::Solved => "The mystery is already solved.".to_string(),
        }
    }

    fn advance_turn(&mut self) {
        self.turn = (self.turn + 1) % self.participants.len();
        self.phase = TurnPhase::AwaitingRoll;
    }
}
