//! Quiz session runner.
//!
//! One call to [`SessionRunner::run`] is one playthrough: the question order is
//! shuffled once, each question's four (letter, text) pairs are shuffled for
//! display, the player may spend the single 50:50 lifeline, and the final tally
//! is printed and returned.
//!
//! Letters stay attached to their text when shuffled, so the correct letter is
//! carried through the permutation as data instead of being recovered by
//! comparing option texts.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::console::{rule, Console};
use crate::error::SessionError;
use crate::model::{Letter, QuestionRecord};
use crate::store::QuestionStore;

/// Default column width for wrapping question text.
pub const DEFAULT_WRAP_WIDTH: usize = 72;

const PROMPT_WITH_LIFELINE: &str = "Your answer (A/B/C/D/L for 50:50): ";
const PROMPT: &str = "Your answer (A/B/C/D): ";
const HINT_WITH_LIFELINE: &str = "Enter one of A, B, C, D, L.";
const HINT: &str = "Enter one of A, B, C, D.";

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Column width for wrapping question text.
    pub wrap_width: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Mutable state of one playthrough.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub player_name: String,
    /// Correct answers so far.
    pub score: u32,
    /// Set on the first lifeline use and never cleared.
    pub lifeline_used: bool,
    /// Indices into the store, in the order they will be asked.
    pub question_order: Vec<usize>,
}

impl SessionState {
    /// Fresh state with a random question order over `question_count` questions.
    pub fn new<R: Rng>(player_name: &str, question_count: usize, rng: &mut R) -> Self {
        let mut question_order: Vec<usize> = (0..question_count).collect();
        question_order.shuffle(rng);
        Self {
            player_name: player_name.to_string(),
            score: 0,
            lifeline_used: false,
            question_order,
        }
    }
}

/// What happened on a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    /// Index of the question in the store.
    pub question: usize,
    /// The letter the player settled on.
    pub answer: Letter,
    pub correct: bool,
    /// Whether the lifeline was spent on this question.
    pub used_lifeline: bool,
}

/// Final tally of a playthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResult {
    pub player_name: String,
    pub score: u32,
    pub total: u32,
    /// `score / total` as a percentage rounded to two decimals.
    pub percentage: f64,
    /// Per-question outcomes in the order asked.
    pub outcomes: Vec<QuestionOutcome>,
}

/// A question with its choices in display order.
#[derive(Debug, Clone)]
pub struct Presentation<'a> {
    record: &'a QuestionRecord,
    order: [Letter; 4],
}

impl<'a> Presentation<'a> {
    /// Shuffle the choices of `record` into a display order.
    pub fn shuffle<R: Rng>(record: &'a QuestionRecord, rng: &mut R) -> Self {
        let mut order = Letter::ALL;
        order.shuffle(rng);
        Self { record, order }
    }

    /// The letter the player must pick to be correct.
    pub fn correct(&self) -> Letter {
        self.record.correct
    }

    /// Letters in display order.
    pub fn order(&self) -> [Letter; 4] {
        self.order
    }

    /// (letter, text) pairs in display order.
    pub fn pairs(&self) -> impl Iterator<Item = (Letter, &'a str)> + '_ {
        self.order
            .iter()
            .map(move |&letter| (letter, self.record.option(letter)))
    }

    /// Pick the two letters a 50:50 lifeline leaves on screen.
    pub fn fifty_fifty<R: Rng>(&self, rng: &mut R) -> FiftyFifty {
        let correct = self.correct();
        let wrong: Vec<Letter> = Letter::ALL
            .into_iter()
            .filter(|&l| l != correct)
            .collect();
        let decoy = wrong.choose(rng).copied().unwrap_or(correct);
        FiftyFifty { correct, decoy }
    }
}

/// The two letters kept by the 50:50 lifeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiftyFifty {
    pub correct: Letter,
    /// The one incorrect letter left in play.
    pub decoy: Letter,
}

impl FiftyFifty {
    pub fn contains(&self, letter: Letter) -> bool {
        letter == self.correct || letter == self.decoy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Answer(Letter),
    Lifeline,
}

/// Runs playthroughs over a borrowed, immutable question store.
pub struct SessionRunner<'a> {
    store: &'a QuestionStore,
    options: SessionOptions,
}

impl<'a> SessionRunner<'a> {
    pub fn new(store: &'a QuestionStore) -> Self {
        Self {
            store,
            options: SessionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Play every question in the store once, in random order.
    pub fn run<C, R>(
        &self,
        player_name: &str,
        console: &mut C,
        rng: &mut R,
    ) -> Result<SessionResult, SessionError>
    where
        C: Console + ?Sized,
        R: Rng,
    {
        let mut state = SessionState::new(player_name, self.store.len(), rng);
        let mut outcomes = Vec::with_capacity(self.store.len());

        for position in 0..state.question_order.len() {
            let question = state.question_order[position];
            let outcome = self.ask(position + 1, question, &mut state, console, rng)?;
            outcomes.push(outcome);
        }

        let total = u32::try_from(self.store.len()).unwrap_or(u32::MAX);
        let result = SessionResult {
            percentage: percentage(state.score, total),
            player_name: state.player_name,
            score: state.score,
            total,
            outcomes,
        };

        print_summary(console, &result)?;
        tracing::debug!(
            score = result.score,
            total = result.total,
            "session finished"
        );
        Ok(result)
    }

    fn ask<C, R>(
        &self,
        number: usize,
        question: usize,
        state: &mut SessionState,
        console: &mut C,
        rng: &mut R,
    ) -> Result<QuestionOutcome, SessionError>
    where
        C: Console + ?Sized,
        R: Rng,
    {
        let record = &self.store.questions()[question];
        let shown = Presentation::shuffle(record, rng);

        console.say("")?;
        console.say(&rule('-'))?;
        console.say(&format!("Q{number}."))?;
        for line in textwrap::wrap(&record.prompt, self.options.wrap_width) {
            console.say(&line)?;
        }
        for (letter, text) in shown.pairs() {
            console.say(&format!("  {letter}) {text}"))?;
        }

        let choice = if state.lifeline_used {
            Choice::Answer(read_answer(console)?)
        } else {
            read_choice(console)?
        };

        let mut used_lifeline = false;
        let answer = match choice {
            Choice::Answer(letter) => letter,
            Choice::Lifeline => {
                state.lifeline_used = true;
                used_lifeline = true;
                let keep = shown.fifty_fifty(rng);

                console.say("")?;
                console.say("Using 50:50 lifeline — two options remain:")?;
                for (letter, text) in shown.pairs().filter(|(l, _)| keep.contains(*l)) {
                    console.say(&format!("  {letter}) {text}"))?;
                }
                read_answer(console)?
            }
        };

        let correct = answer == shown.correct();
        if correct {
            state.score += 1;
            console.say("✅ Correct!")?;
        } else {
            console.say(&format!(
                "❌ Wrong. Correct answer: {}) {}",
                shown.correct(),
                record.correct_text()
            ))?;
        }

        Ok(QuestionOutcome {
            question,
            answer,
            correct,
            used_lifeline,
        })
    }
}

/// Read A–D or L, reprompting on anything else.
fn read_choice<C: Console + ?Sized>(console: &mut C) -> Result<Choice, SessionError> {
    prompt_until(console, PROMPT_WITH_LIFELINE, HINT_WITH_LIFELINE, |input| {
        if input == "L" {
            Some(Choice::Lifeline)
        } else {
            input.parse().ok().map(Choice::Answer)
        }
    })
}

/// Read A–D, reprompting on anything else.
fn read_answer<C: Console + ?Sized>(console: &mut C) -> Result<Letter, SessionError> {
    prompt_until(console, PROMPT, HINT, |input| input.parse().ok())
}

fn prompt_until<C, T>(
    console: &mut C,
    prompt: &str,
    hint: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, SessionError>
where
    C: Console + ?Sized,
{
    loop {
        let line = console.ask(prompt)?.ok_or(SessionError::InputClosed)?;
        let normalized = line.trim().to_uppercase();
        if let Some(value) = parse(&normalized) {
            return Ok(value);
        }
        console.say(hint)?;
    }
}

fn print_summary<C: Console + ?Sized>(
    console: &mut C,
    result: &SessionResult,
) -> Result<(), SessionError> {
    console.say("")?;
    console.say(&rule('='))?;
    console.say(&format!("🎉 Finished, {}!", result.player_name))?;
    console.say(&format!(
        "Score: {}/{}  ({}%)",
        result.score,
        result.total,
        format_percentage(result.percentage)
    ))?;
    console.say(&rule('='))?;
    Ok(())
}

/// `score / total * 100` rounded to two decimals, or `0.0` when `total` is zero.
pub fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = score as f64 / total as f64 * 100.0;
    (raw * 100.0).round_ties_even() / 100.0
}

/// Render a percentage with at least one decimal place (`60.0`, `33.33`).
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
