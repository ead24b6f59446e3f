//! Terminal front-end: the home list, the add-item form, delete with
//! confirmation and the scan flow.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use color_eyre::eyre::{bail, Result};
use colored::{ColoredString, Colorize};
use expiry_tracker::detector::{build_detector, ImageRef};
use expiry_tracker::item::{parse_expiry_input, Category, NewFoodItem};
use expiry_tracker::prompt::{AutoConfirm, Decision, Prompt};
use expiry_tracker::store::KeyValueStore;
use expiry_tracker::urgency::{today, Urgency};
use expiry_tracker::user_config::UserConfig;
use expiry_tracker::view::{scan_expiry, ItemListView, ItemRow, EMPTY_HINT, EMPTY_TITLE};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every item, most urgent first
    List {
        /// Print the rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an item
    Add {
        /// Item name
        #[arg(long)]
        name: String,
        /// Dairy, Meat, Vegetables, Fruits, Bakery or Other
        #[arg(long, default_value_t = Category::Dairy, value_parser = Category::from_str)]
        category: Category,
        /// Expiry date as YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_expiry_input)]
        expires: Option<NaiveDate>,
    },
    /// Delete an item after confirmation
    Delete {
        /// Id shown by `list`
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Detect the expiry date on a label photo, optionally adding the item
    Scan {
        /// Path to the label photo
        image: PathBuf,
        /// Add an item with this name using the chosen date
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value_t = Category::Dairy, value_parser = Category::from_str)]
        category: Category,
        /// Date to use when no date is detected or it is declined
        #[arg(long, value_parser = parse_expiry_input)]
        expires: Option<NaiveDate>,
        /// Accept the detected date without asking
        #[arg(long)]
        yes: bool,
    },
}

impl Command {
    pub async fn run<S: KeyValueStore>(
        self,
        view: &mut ItemListView<S>,
        cfg: &UserConfig,
    ) -> Result<()> {
        match self {
            Command::List { json } => list(view, json),
            Command::Add {
                name,
                category,
                expires,
            } => {
                let expiry = expires.unwrap_or_else(today);
                add(view, NewFoodItem::new(name, category, expiry)).await
            }
            Command::Delete { id, yes } => delete(view, id, prompt_for(yes)).await,
            Command::Scan {
                image,
                name,
                category,
                expires,
                yes,
            } => {
                let detector = build_detector(cfg.detector.kind, cfg.detector.stub_date);
                let image = ImageRef::from(image.as_path());
                let outcome = scan_expiry(detector.as_ref(), prompt_for(yes), &image).await;
                let expiry = outcome.expiry_or(expires.unwrap_or_else(today));

                match name {
                    Some(name) => add(view, NewFoodItem::new(name, category, expiry)).await,
                    None => {
                        println!("Expiry date: {expiry}");
                        Ok(())
                    }
                }
            }
        }
    }
}

fn prompt_for(yes: bool) -> &'static dyn Prompt {
    if yes {
        &AutoConfirm
    } else {
        &StdinPrompt
    }
}

fn list<S: KeyValueStore>(view: &ItemListView<S>, json: bool) -> Result<()> {
    let rows = view.rows(today());
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        println!("{EMPTY_TITLE}");
        println!("{EMPTY_HINT}");
        return Ok(());
    }
    for row in &rows {
        println!("{}", format_row(row));
    }
    Ok(())
}

fn format_row(row: &ItemRow) -> String {
    let status = format!("{:<8}", row.urgency.map_or("unknown", Urgency::as_str));
    format!(
        "{:>15}  {:<24} {:<10} {} {}",
        row.id,
        row.name,
        row.category,
        paint(&status, row.urgency),
        paint(&row.label, row.urgency)
    )
}

/// Color `text` with the urgency accent; unknown urgency is dimmed.
fn paint(text: &str, urgency: Option<Urgency>) -> ColoredString {
    match urgency {
        Some(urgency) => {
            let (r, g, b) = urgency.rgb();
            text.truecolor(r, g, b)
        }
        None => text.dimmed(),
    }
}

async fn add<S: KeyValueStore>(view: &mut ItemListView<S>, new_item: NewFoodItem) -> Result<()> {
    let item = view.add(new_item, Utc::now()).await?;
    if !view.items().iter().any(|i| i.id == item.id) {
        bail!("Failed to save '{}'; see the log for details", item.name);
    }
    println!("Added {} (id {}), expires {}", item.name, item.id, item.expiry_date);
    Ok(())
}

async fn delete<S: KeyValueStore>(
    view: &mut ItemListView<S>,
    id: i64,
    prompt: &dyn Prompt,
) -> Result<()> {
    if !view.items().iter().any(|i| i.id == id) {
        println!("No item with id {id}");
        return Ok(());
    }
    if !view.delete(id, prompt).await {
        println!("Cancelled");
        return Ok(());
    }
    if view.items().iter().any(|i| i.id == id) {
        bail!("Failed to delete item {id}; see the log for details");
    }
    println!("Deleted item {id}");
    Ok(())
}

/// Asks on stdout and reads the answer from stdin.
///
/// End of input counts as cancel.
struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&self, title: &str, message: &str) -> Decision {
        let mut stdout = std::io::stdout().lock();
        if write!(stdout, "{title}: {message} [y/N/c] ")
            .and_then(|()| stdout.flush())
            .is_err()
        {
            return Decision::Cancel;
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => Decision::Cancel,
            Ok(_) => parse_answer(&answer),
        }
    }
}

fn parse_answer(answer: &str) -> Decision {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Decision::Yes,
        "c" | "cancel" => Decision::Cancel,
        _ => Decision::No,
    }
}
