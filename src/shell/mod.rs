pub(crate) mod command_parser;
mod render;

use anyhow::Result;
use colored::*;
use std::io::Write;

use crate::dataset::MaterialTable;
use crate::llm::MentorClient;
use crate::session::Session;
use crate::terminal::{Input, Terminal};
use self::command_parser::{Command, CommandParser};

const SUGGESTION_LIMIT: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive loop around a [`Console`].
pub struct Shell<C> {
    terminal: Terminal,
    console: Console<C>,
}

impl<C: MentorClient> Shell<C> {
    pub fn new(materials: MaterialTable, session: Session<C>) -> Result<Self> {
        let names = materials.names().into_iter().map(str::to_string).collect();
        Ok(Shell {
            terminal: Terminal::new(names)?,
            console: Console::new(materials, session),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout();
        self.console.banner(&mut stdout)?;

        loop {
            let line = match self.terminal.read_line()? {
                Input::Line(line) => line,
                Input::Interrupted => continue,
                Input::Eof => break,
            };

            let command = match CommandParser::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("{} {}", "Error:".red(), e);
                    continue;
                }
            };

            if self.console.execute(command, &mut stdout).await? == Flow::Exit {
                break;
            }
            stdout.flush()?;
        }

        Ok(())
    }
}

/// Command dispatch over the dataset and the session, writing to any sink.
pub struct Console<C> {
    materials: MaterialTable,
    session: Session<C>,
}

impl<C: MentorClient> Console<C> {
    pub fn new(materials: MaterialTable, session: Session<C>) -> Self {
        Console { materials, session }
    }

    pub fn banner<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "{}",
            "📄 Ficha Técnica de Materiales de Construcción con apoyo de Mentor AI"
                .bright_cyan()
                .bold()
        )?;
        writeln!(
            out,
            "{} materiales precargados. Escribe 'help' para ver los comandos.",
            self.materials.len()
        )?;
        Ok(())
    }

    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Empty => {}
            Command::List(filter) => self.list(filter.as_deref(), out)?,
            Command::Show(names) => {
                for name in &names {
                    self.show(name, out)?;
                }
            }
            Command::Ask(name) => self.ask(&name, out).await?,
            Command::Lookup(text) => self.lookup(&text, out)?,
            Command::Other(text) => {
                writeln!(out, "{}", render::material_header(&text))?;
                self.consult(&text, out).await?;
            }
            Command::Cache => self.cache(out)?,
            Command::Help => writeln!(out, "{}", render::help())?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn list<W: Write>(&self, filter: Option<&str>, out: &mut W) -> Result<()> {
        let records = match filter {
            Some(pattern) => self.materials.search(pattern),
            None => self.materials.records().iter().collect(),
        };

        if records.is_empty() {
            writeln!(out, "{}", "Ningún material coincide.".yellow())?;
            return Ok(());
        }

        for record in records {
            let marker = if self.session.cache().contains(&record.name) {
                "✓".green().to_string()
            } else {
                " ".to_string()
            };
            writeln!(out, " {} {} ({})", marker, record.name, record.english_name.dimmed())?;
        }
        Ok(())
    }

    fn show<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let record = match self.materials.get(name) {
            Some(record) => record,
            None => {
                let suggestions = self.materials.suggestions(name, SUGGESTION_LIMIT);
                writeln!(out, "{}", render::not_found(name, &suggestions))?;
                return Ok(());
            }
        };

        writeln!(out, "\n{}", render::material_header(&record.name))?;
        writeln!(out, "{}", render::heading(render::PHYSICAL_HEADING))?;
        writeln!(out, "{}", render::record_fields(record))?;
        writeln!(out, "{}", render::heading(render::MENTOR_HEADING))?;

        match self.session.cached(name) {
            Some(text) => writeln!(out, "{}", text)?,
            None => writeln!(
                out,
                "{}",
                format!("Sin consulta todavía. Usa 'ask {}' para consultar al Mentor AI.", name).dimmed()
            )?,
        }
        Ok(())
    }

    async fn ask<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        if self.materials.get(name).is_none() {
            let suggestions = self.materials.suggestions(name, SUGGESTION_LIMIT);
            writeln!(out, "{}", render::not_found(name, &suggestions))?;
            writeln!(out, "Para un material fuera de la lista usa 'other {}'.", name)?;
            return Ok(());
        }

        writeln!(out, "\n{}", render::material_header(name))?;
        writeln!(out, "{}", render::heading(render::MENTOR_HEADING))?;
        self.consult(name, out).await
    }

    fn lookup<W: Write>(&self, text: &str, out: &mut W) -> Result<()> {
        match self.session.cached(text) {
            Some(answer) => {
                writeln!(out, "{}", render::material_header(text))?;
                writeln!(out, "{}", answer)?;
            }
            None => writeln!(
                out,
                "{}",
                format!("No hay respuesta guardada para '{}'. Usa 'other {}' para consultarla.", text, text)
                    .dimmed()
            )?,
        }
        Ok(())
    }

    /// Blocks the turn on one Mentor AI call. Failures are reported, not returned.
    async fn consult<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "{}", "Consultando al Mentor AI...".dimmed())?;
        out.flush()?;

        match self.session.consult(name).await {
            Ok(answer) => {
                writeln!(out, "{}", render::STORED_MESSAGE.green())?;
                writeln!(out, "{}", answer)?;
            }
            Err(e) => {
                log::warn!("Mentor AI query for '{}' failed: {}", name, e);
                writeln!(out, "{}", render::query_failure(&e))?;
                if let Some(previous) = self.session.cached(name) {
                    writeln!(out, "{}", previous)?;
                }
            }
        }
        Ok(())
    }

    fn cache<W: Write>(&self, out: &mut W) -> Result<()> {
        let names = self.session.cache().names();
        if names.is_empty() {
            writeln!(out, "{}", "Aún no hay respuestas guardadas en esta sesión.".dimmed())?;
        } else {
            for name in names {
                writeln!(out, " {} {}", "✓".green(), name)?;
            }
        }
        Ok(())
    }
}
