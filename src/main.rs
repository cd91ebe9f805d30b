use clap::{Parser, Subcommand, ValueEnum};
use course_fees::application::enrollment::QuoteService;
use course_fees::domain::plan::PaymentPlan;
use course_fees::domain::validation::{CONTACT_REJECTED, CONTACT_SENT, ContactForm, EnrollmentForm};
use course_fees::infrastructure::in_memory::InMemoryCatalog;
use course_fees::interfaces::csv::course_reader::CourseReader;
use course_fees::interfaces::csv::quote_writer::QuoteWriter;
use course_fees::telemetry;
use miette::{IntoDiagnostic, Result, bail};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a selection of courses
    Quote {
        /// Course catalog CSV file (id,price)
        catalog: PathBuf,

        /// Course id to select; repeat for several courses
        #[arg(long = "course")]
        courses: Vec<String>,

        #[arg(long, default_value_t = PaymentPlan::Standard)]
        plan: PaymentPlan,

        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// Enroll a student in the selected courses
    Enroll {
        /// Course catalog CSV file (id,price)
        catalog: PathBuf,

        #[arg(long = "course", required = true)]
        courses: Vec<String>,

        #[arg(long, default_value_t = PaymentPlan::Standard)]
        plan: PaymentPlan,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,
    },
    /// Check a contact form submission
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let file = File::open(path).into_diagnostic()?;
    let reader = CourseReader::new(file);
    let mut catalog = InMemoryCatalog::new();
    for course_result in reader.courses() {
        match course_result {
            Ok(course) => {
                if let Err(e) = catalog.insert(course) {
                    eprintln!("Error reading course: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading course: {}", e);
            }
        }
    }
    info!(courses = catalog.len(), path = %path.display(), "Loaded catalog");
    Ok(catalog)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level).into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Quote {
            catalog,
            courses,
            plan,
            format,
        } => {
            let catalog = load_catalog(&catalog)?;
            let view = QuoteService::new(&catalog)
                .quote(&courses, plan)
                .into_diagnostic()?;
            match format {
                OutputFormat::Csv => {
                    for line in &view.lines {
                        writeln!(out, "{}", line).into_diagnostic()?;
                    }
                    QuoteWriter::new(&mut out)
                        .write_quote(&view.quote)
                        .into_diagnostic()?;
                }
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &view).into_diagnostic()?;
                    writeln!(out).into_diagnostic()?;
                }
            }
        }
        Command::Enroll {
            catalog,
            courses,
            plan,
            name,
            email,
            phone,
        } => {
            let catalog = load_catalog(&catalog)?;
            let form = EnrollmentForm::new(&name, &email, &phone);
            let confirmation = QuoteService::new(&catalog)
                .enroll(&form, &courses, plan)
                .into_diagnostic()?;
            writeln!(out, "{}", confirmation.message).into_diagnostic()?;
        }
        Command::Contact {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                phone,
                subject,
                message,
            };
            let errors = form.validate();
            if !errors.is_empty() {
                for error in &errors {
                    writeln!(out, "{}", error).into_diagnostic()?;
                }
                warn!(failed = errors.len(), "Contact form rejected");
                bail!(CONTACT_REJECTED);
            }
            writeln!(out, "{}", CONTACT_SENT).into_diagnostic()?;
        }
    }

    Ok(())
}
