//! Interactive session: prompt → reports → raw rows → restart.

use crate::cli::commands::{loader_for, print_reports};
use crate::config::Config;
use crate::core::{FilterEngine, Loader};
use crate::errors::AppResult;
use crate::models::{Calendar, Dataset};
use crate::ui::messages::{info_text, warning_text};
use crate::ui::prompt::Prompter;
use crate::ui::render::Renderer;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What the user asked to analyse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub city: String,
    pub month: String,
    pub day: String,
}

/// States of the session loop.
enum Step {
    Prompting,
    Reporting(Choice),
    OfferingRaw { dataset: Dataset, offset: usize },
    OfferingRestart,
    Done,
}

pub struct Explorer<'a> {
    loader: &'a Loader,
    engine: &'a FilterEngine,
    renderer: &'a Renderer,
    page_size: usize,
}

impl<'a> Explorer<'a> {
    pub fn new(
        loader: &'a Loader,
        engine: &'a FilterEngine,
        renderer: &'a Renderer,
        page_size: usize,
    ) -> Self {
        Self {
            loader,
            engine,
            renderer,
            page_size: page_size.max(1),
        }
    }

    /// Drive the session until the user declines a restart or input ends.
    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> AppResult<()> {
        writeln!(
            prompter.output(),
            "Hello! Let's explore some US bikeshare data!"
        )?;

        let mut step = Step::Prompting;
        loop {
            step = match step {
                Step::Prompting => match self.ask(prompter)? {
                    Some(choice) => Step::Reporting(choice),
                    None => Step::Done,
                },
                Step::Reporting(choice) => self.report(prompter.output(), &choice)?,
                Step::OfferingRaw { dataset, offset } => {
                    self.offer_raw(prompter, dataset, offset)?
                }
                Step::OfferingRestart => match prompter.confirm("Would you like to restart?")? {
                    Some(true) => Step::Prompting,
                    _ => Step::Done,
                },
                Step::Done => {
                    debug!("Interactive session finished");
                    return Ok(());
                }
            };
        }
    }

    fn ask<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> AppResult<Option<Choice>> {
        let calendar = self.engine.calendar();

        let cities = self.loader.catalog().keys();
        let Some(city) = prompter.choose(
            "Would you like to see data for chicago, new york city, or washington?",
            &cities,
        )?
        else {
            return Ok(None);
        };

        let months = with_all(calendar.months());
        let Some(month) = prompter.choose(
            "Which month? Type a month name (e.g. january) or 'all'.",
            &months,
        )?
        else {
            return Ok(None);
        };

        let days = with_all(calendar.days());
        let Some(day) = prompter.choose(
            "Which day? Type a day name (e.g. monday) or 'all'.",
            &days,
        )?
        else {
            return Ok(None);
        };

        Ok(Some(Choice { city, month, day }))
    }

    fn report<W: Write>(&self, out: &mut W, choice: &Choice) -> AppResult<Step> {
        let dataset = self.loader.load(&choice.city)?;
        let filtered = self
            .engine
            .filter_by_name(&dataset, &choice.month, &choice.day)?;

        if filtered.is_empty() {
            writeln!(
                out,
                "\n{}",
                warning_text(format!(
                    "No trips in {} for month '{}' and day '{}'.",
                    choice.city, choice.month, choice.day
                ))
            )?;
            return Ok(Step::OfferingRestart);
        }

        writeln!(
            out,
            "\n{}",
            info_text(format!(
                "{} trips in {} (month: {}, day: {})",
                filtered.len(),
                choice.city,
                choice.month,
                choice.day
            ))
        )?;
        print_reports(out, self.renderer, &filtered)?;

        Ok(Step::OfferingRaw {
            dataset: filtered,
            offset: 0,
        })
    }

    fn offer_raw<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        dataset: Dataset,
        offset: usize,
    ) -> AppResult<Step> {
        if offset >= dataset.len() {
            writeln!(prompter.output(), "\nNo more raw data to display.")?;
            return Ok(Step::OfferingRestart);
        }

        let question = if offset == 0 {
            format!("Would you like to see {} lines of raw data?", self.page_size)
        } else {
            format!("Would you like to see {} more lines?", self.page_size)
        };

        match prompter.confirm(&question)? {
            Some(true) => {
                let page = self.renderer.raw_rows(&dataset, offset, self.page_size);
                write!(prompter.output(), "\n{page}")?;
                Ok(Step::OfferingRaw {
                    dataset,
                    offset: offset + self.page_size,
                })
            }
            Some(false) => Ok(Step::OfferingRestart),
            None => Ok(Step::Done),
        }
    }
}

fn with_all(names: &[&'static str]) -> Vec<&'static str> {
    std::iter::once("all").chain(names.iter().copied()).collect()
}

/// Handle the `explore` subcommand (also the default)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let calendar = Calendar::english();
    let loader = loader_for(cfg, calendar.clone());
    let engine = FilterEngine::new(calendar);
    let renderer = Renderer::new(cfg);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    Explorer::new(&loader, &engine, &renderer, cfg.raw_page_size).run(&mut prompter)
}
