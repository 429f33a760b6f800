use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use roster_cli::seeder;
use roster_config::DatabaseConfig;
use roster_core::pagination::PageQuery;
use roster_db::{SqlitePool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(about = "Roster CLI - Maintenance tools for the student roster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database with fake students
    Seed {
        /// Number of students to create
        #[arg(short = 'c', long, default_value = "25")]
        count: usize,
    },
    /// Print one page of students
    List {
        /// Page number (1-indexed)
        #[arg(short = 'p', long, default_value = "1")]
        page: i64,

        /// Students per page (2, 3, 5 or 10)
        #[arg(short = 's', long, default_value = "3")]
        page_size: i64,
    },
    /// Delete every student
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Seed { count } => handle_seed(&pool, count).await,
        Commands::List { page, page_size } => handle_list(&pool, page, page_size).await,
        Commands::Clear { yes } => handle_clear(&pool, yes).await,
    }
}

async fn connect() -> Result<SqlitePool, Box<dyn std::error::Error>> {
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

async fn handle_seed(pool: &SqlitePool, count: usize) {
    if let Err(e) = seeder::seed_students(pool, count).await {
        eprintln!("\n❌ Error seeding students: {}", e);
        std::process::exit(1);
    }
}

async fn handle_list(pool: &SqlitePool, page: i64, page_size: i64) {
    let query = PageQuery {
        page: Some(page),
        page_size: Some(page_size),
    };

    match seeder::list_page(pool, &query).await {
        Ok((students, window)) => {
            println!(
                "Page {} of {} ({} per page, {} students)",
                window.page, window.total_pages, window.page_size, window.total_items
            );
            for student in &students {
                println!(
                    "  {:>5}  {:<30} {:<35} {}",
                    student.id, student.name, student.email, student.mobile
                );
            }
            if window.total_items > 0 {
                println!(
                    "Showing {}-{}, {} more",
                    window.start_item(),
                    window.end_item(),
                    window.remaining_items()
                );
            }
        }
        Err(e) => {
            eprintln!("❌ Error listing students: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear(pool: &SqlitePool, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete every student?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("Aborted.");
            return;
        }
    }

    match seeder::clear_students(pool).await {
        Ok(removed) => println!("✅ Removed {} students", removed),
        Err(e) => {
            eprintln!("❌ Error clearing students: {}", e);
            std::process::exit(1);
        }
    }
}
