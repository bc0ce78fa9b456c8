//! # The Prompt Loop
//!
//! Line-oriented surface over the command layer. Every keystroke-level
//! interaction of the original shop page maps to one short command here:
//!
//! ```text
//! search <text>     live text filter          (empty text clears it)
//! cat <name>        category tab              (cats lists the tabs)
//! sort low|high     cost sort toggle
//! list              the visible grid
//! open <n>          open the card at position n
//! options [filter]  the card's option list, filtered by typed text
//! pick <value>      choose an option (armor name on armor-math cards)
//! inscribe <text>   accept free text verbatim
//! add               commit the card to the stash
//! stash             running order + totals
//! close             put the card away
//! quit              leave the outpost
//! ```
//!
//! The loop never dies on a bad command: errors print and the prompt
//! returns.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use outpost_grimoire::SpellSource;

use crate::commands::{catalog, configure, stash};
use crate::error::AppError;
use crate::state::{BrowseState, CardState, StashState};

/// Shared handles the shell dispatches over.
pub struct Shell {
    pub browse: BrowseState,
    pub cards: CardState,
    pub stash: StashState,
    pub spell_source: Arc<dyn SpellSource>,
}

impl Shell {
    /// Runs the prompt loop until EOF or `quit`.
    pub async fn run(&self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        println!("Igor's Outpost - {} wares on the shelves", self.browse.items().len());
        println!("Type `help` for commands.");

        loop {
            stdout.write_all(b"igor> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break; // EOF
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "quit" | "exit") {
                println!("The door creaks shut behind you.");
                break;
            }

            if let Err(e) = self.dispatch(line) {
                println!("! {e}");
            }
        }

        Ok(())
    }

    fn dispatch(&self, line: &str) -> Result<(), AppError> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };
        debug!(%command, %rest, "dispatch");

        match command {
            "help" => print_help(),
            "list" => self.print_list(),
            "cats" => {
                println!("{}", catalog::list_categories(&self.browse).join(" | "));
            }
            "search" => {
                catalog::set_search(&self.browse, rest);
                self.print_list();
            }
            "cat" => {
                catalog::set_category(&self.browse, if rest.is_empty() { "All" } else { rest });
                self.print_list();
            }
            "sort" => match outpost_core::SortDir::parse(rest) {
                Some(dir) => {
                    catalog::set_sort(&self.browse, dir);
                    self.print_list();
                }
                None => println!("! sort takes `low`/`asc` or `high`/`desc`"),
            },
            "open" => match rest.parse::<usize>() {
                Ok(position) => {
                    let view =
                        configure::open_card(&self.cards, &self.browse, &self.spell_source, position)?;
                    self.print_card(&view);
                }
                Err(_) => println!("! open takes a position from `list`"),
            },
            "card" => {
                let view = configure::card(&self.cards)?;
                self.print_card(&view);
            }
            "options" => {
                let view = configure::options(&self.cards, rest)?;
                self.print_options(&view);
            }
            "pick" => {
                let view = configure::pick(&self.cards, rest)?;
                self.print_card(&view);
            }
            "inscribe" => {
                let view = configure::inscribe(&self.cards, rest)?;
                self.print_card(&view);
            }
            "close" => configure::close(&self.cards),
            "add" => match stash::add_to_stash(&self.cards, &self.stash) {
                Ok(line) => println!("Stashed: {} - {} GP", line.display_name, line.display_price),
                Err(AppError::Config(_)) => {
                    // Commit gate refused: same face as the disabled button.
                    println!("[ Select Option ]");
                }
                Err(e) => return Err(e),
            },
            "stash" => {
                let view = stash::stash_view(&self.stash);
                if self.stash.with_stash(|s| s.is_empty()) {
                    println!("The stash is empty.");
                } else {
                    for line in &view.lines {
                        println!("  {} - {} GP", line.display_name, line.display_price);
                    }
                }
                println!("Geas Contract: {} GP ({} lines)", view.display_total, view.count);
            }
            other => println!("! unknown command `{other}` - try `help`"),
        }

        Ok(())
    }

    fn print_list(&self) {
        let views = catalog::list_items(&self.browse);
        if views.is_empty() {
            println!("\"The void yields nothing matching that description...\"");
            return;
        }
        for view in &views {
            println!(
                "{:>3}. {} [{}] - {} GP  ({} / {})",
                view.position, view.name, view.rarity, view.display_cost, view.category, view.kind
            );
        }
    }

    fn print_card(&self, view: &configure::CardView) {
        println!("{} - {} GP", view.name, view.display_price);
        if let Some(note) = &view.note {
            println!("  \"{note}\"");
        }
        match &view.selected {
            Some(sel) => println!("  selected: {sel}"),
            None => println!("  selected: -"),
        }
        if view.valid {
            println!("  [ Add to Stash ]  (`add`)");
        } else {
            println!("  [ Select Option ]  (`options`, then `pick` or `inscribe`)");
        }
    }

    fn print_options(&self, view: &configure::OptionsView) {
        if view.loading {
            println!("Summoning scrolls...");
        }
        for opt in &view.options {
            println!("  - {opt}");
        }
        if view.offer_inscribe {
            println!("  (nothing matches - `inscribe {}` to write it in yourself)", view.typed);
        }
    }
}

fn print_help() {
    println!("  search <text> | cat <name> | cats | sort low|high | list");
    println!("  open <n> | card | options [filter] | pick <value> | inscribe <text> | close");
    println!("  add | stash | quit");
}
