use clap::{Parser, Subcommand, ValueEnum};
use tagshield::mt::{MockMode, MockTranslator, translate_protected};
use tagshield::{builtin_catalog, protect, restore, restore_locally};

#[derive(Parser)]
#[command(name = "tagshield", about = "Protect game markup across a translation boundary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a string and print its protected form as JSON
    Protect { text: String },
    /// Put original markup back in place of surviving placeholders
    Restore {
        /// The untranslated source string
        original: String,
        /// The translation containing TAG_N placeholders
        translated: String,
    },
    /// Reinsert tags a lossy translation dropped outright
    Recover {
        /// The untranslated source string
        original: String,
        /// The translation missing some markup
        translation: String,
    },
    /// Run the full pipeline against a mock translation boundary
    Translate {
        text: String,
        /// Target locale passed to the mock
        #[arg(long, default_value = "ar")]
        target: String,
        /// Mock boundary behavior
        #[arg(long, value_enum, default_value = "suffix")]
        mode: BoundaryMode,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BoundaryMode {
    /// Keep placeholders, append the target locale
    Suffix,
    /// Reverse word order
    Reorder,
    /// Delete placeholders and icon glyphs
    DropMarkup,
    /// Return the text unchanged
    Noop,
}

impl From<BoundaryMode> for MockMode {
    fn from(mode: BoundaryMode) -> Self {
        match mode {
            BoundaryMode::Suffix => MockMode::Suffix,
            BoundaryMode::Reorder => MockMode::Reorder,
            BoundaryMode::DropMarkup => MockMode::DropMarkup,
            BoundaryMode::Noop => MockMode::NoOp,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Protect { text } => {
            let protected = protect(&text);
            println!("{}", serde_json::to_string_pretty(&protected)?);
        }
        Command::Restore {
            original,
            translated,
        } => {
            let protected = protect(&original);
            println!("{}", restore(&translated, &protected.tags));
        }
        Command::Recover {
            original,
            translation,
        } => {
            println!("{}", restore_locally(&original, &translation));
        }
        Command::Translate { text, target, mode } => {
            let mock = MockTranslator::new(mode.into());
            let result =
                translate_protected(builtin_catalog(), &mock, &text, "en", &target).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
