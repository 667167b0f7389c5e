use anyhow::Context;
use campus_shell::build_navigator;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campus_shell")]
#[command(about = "Campus shell navigation demo", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Navigate through every route and report each resolution
    Walk,
    /// Navigate to one target and print the committed location
    Go {
        /// Target path, query string allowed (e.g. "/students?tab=all")
        target: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let navigator = build_navigator().context("route table failed validation")?;

    match cli.command.unwrap_or(Commands::Walk) {
        Commands::Routes => navigator.dump_routes(),
        Commands::Walk => walk(&navigator),
        Commands::Go { target } => {
            let location = navigator
                .push(&target)
                .with_context(|| format!("navigation to '{target}' was rejected"))?;
            println!("{}", serde_json::to_string_pretty(&*location)?);
        }
    }

    Ok(())
}

/// Visit every page once, then a known-bad path, asserting each outcome.
fn walk(navigator: &wayfinder::Navigator) {
    let stops = vec![
        ("/", "home", "HomeView"),
        ("/about", "about", "AboutView"),
        ("/test", "Test", "TestView"),
        ("/new", "NewPage", "NewPage"),
        ("/calculator", "Calculator", "CalculatorView"),
        ("/students", "Students", "StudentListView"),
        ("/student-manage", "StudentManage", "StudentManageView"),
        ("/todos", "Todos", "TodoListView"),
        ("/products", "Products", "ProductView"),
        ("/simple-todo", "SimpleTodo", "SimpleTodoView"),
        ("/shopping-cart", "ShoppingCart", "ShoppingCartView"),
        ("/item-list", "ItemList", "ItemList"),
        ("/todo-list", "TodoList", "TodoList"),
        ("/does/not/exist", "<none>", "<none>"),
    ];

    for (target, expected_name, expected_view) in stops {
        match navigator.push(target) {
            Ok(location) => {
                println!(
                    "✅ {target} → view: {} | name: {} | href: {}",
                    location.view.as_deref().unwrap_or("-"),
                    location.name.as_deref().unwrap_or("-"),
                    location.href
                );
                assert_eq!(location.name.as_deref(), Some(expected_name));
                assert_eq!(location.view.as_deref(), Some(expected_view));
            }
            Err(err) => {
                println!("❌ {target} → rejected: {err}");
                assert_eq!(expected_view, "<none>");
            }
        }
    }

    println!(
        "[history] {} entries after the walk",
        navigator.history_snapshot().len()
    );
}
