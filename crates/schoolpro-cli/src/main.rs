use schoolpro_cli::admin::create_admin;
use schoolpro_cli::seeder::{self, AcademicsPerSchool, SeedConfig};
use schoolpro_models::ids::SchoolId;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "schoolpro-cli")]
#[command(about = "SchoolPro CLI - Administrative tools for SchoolPro", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new administrator account
    CreateAdmin {
        /// Full name of the admin
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// School the admin belongs to
        #[arg(short = 's', long)]
        school_id: Option<SchoolId>,
    },
    /// Seed the database with fake schools and their academic structure
    Seed {
        /// Number of schools to create
        #[arg(short = 's', long, default_value = "5")]
        schools: usize,

        /// Number of classes per school
        #[arg(long, default_value = "6")]
        classes: usize,

        /// Number of sections per class
        #[arg(long, default_value = "3")]
        sections: usize,

        /// Number of departments per school
        #[arg(long, default_value = "3")]
        departments: usize,

        /// Number of subjects per department
        #[arg(long, default_value = "4")]
        subjects: usize,
    },
    /// Clear all seeded schools (cascades to classes, sections, departments, subjects)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
            school_id,
        } => handle_create_admin(&pool, name, email, password, school_id).await,
        Commands::Seed {
            schools,
            classes,
            sections,
            departments,
            subjects,
        } => handle_seed(&pool, schools, classes, sections, departments, subjects).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &sqlx::postgres::PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    school_id: Option<SchoolId>,
) {
    let name = name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Full name")
            .interact_text()
            .expect("Failed to read name")
    });

    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_admin(pool, &name, &email, &password, school_id).await {
        Ok(id) => {
            println!("\n✅ Admin created successfully!");
            println!("   Id: {}", id);
            println!("   Email: {}", email);
            println!("   Name: {}", name);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(
    pool: &sqlx::postgres::PgPool,
    schools: usize,
    classes: usize,
    sections: usize,
    departments: usize,
    subjects: usize,
) {
    let config = SeedConfig::new(schools).with_academics(AcademicsPerSchool {
        classes,
        sections_per_class: sections,
        departments,
        subjects_per_department: subjects,
    });

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &sqlx::postgres::PgPool) {
    match seeder::clear_all(pool).await {
        Ok(_) => println!("✅ Seeded data cleared"),
        Err(e) => {
            eprintln!("\n❌ Error clearing seeded data: {}", e);
            std::process::exit(1);
        }
    }
}
