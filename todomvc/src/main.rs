//! Command-line TodoMVC.
//!
//! Owns the whole lifecycle: storage, store, and the dispatch entry point.
//! Lines read from stdin are parsed into actions and dispatched against the
//! store; every dispatch re-renders the attached root, which `show` prints.

use std::io::{self, BufRead};
use std::sync::Arc;

use microstore_core::environment::FileStore;
use microstore_core::middleware::Logging;
use microstore_runtime::{Store, StringRoot};
use todomvc::reducer::{TodoEnvironment, TodoReducer};
use todomvc::storage::TodoStorage;
use todomvc::{app_view, AppState, Filter, TodoAction};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type TodoStore = Store<Logging<TodoReducer>>;

enum Command {
    Dispatch(TodoAction),
    Show,
    Help,
    Quit,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todomvc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir =
        std::env::var("TODOMVC_DATA_DIR").unwrap_or_else(|_| "todomvc-data".to_string());
    let storage = TodoStorage::new(Arc::new(FileStore::new(&data_dir)));
    let todos = storage.load();
    tracing::info!(data_dir, todos = todos.len(), "loaded persisted todos");

    let env = TodoEnvironment::new(storage);
    let mut store = Store::new(AppState::new(todos), Logging::new(TodoReducer::new()), env);
    let root = StringRoot::new();
    store.attach(app_view(), Box::new(root.clone()));

    print_help();
    print_summary(&store);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(command) = parse_command(line.trim()) else {
            continue;
        };
        match command {
            Command::Dispatch(action) => match store.dispatch(action) {
                Ok(()) => print_summary(&store),
                Err(error) => eprintln!("error: {error}"),
            },
            Command::Show => println!("{}", root.content()),
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }
}

fn parse_command(line: &str) -> Option<Command> {
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = line
        .split_once(' ')
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let action = match verb {
        "add" => Some(TodoAction::Add(rest.to_string())),
        "toggle" => parse_index(rest).map(TodoAction::Toggle),
        "toggle-all" => parse_bool(rest).map(TodoAction::ToggleAll),
        "destroy" => parse_index(rest).map(TodoAction::Destroy),
        "filter" => {
            let filter = Filter::parse(rest);
            if filter.is_none() {
                eprintln!("expected one of: all, active, completed");
            }
            filter.map(TodoAction::SwitchFilter)
        }
        "clear" => Some(TodoAction::ClearCompleted),
        "edit" => parse_index(rest).map(TodoAction::StartEdit),
        "cancel" => Some(TodoAction::CancelEdit),
        "end" => Some(TodoAction::EndEdit(rest.to_string())),
        "show" => return Some(Command::Show),
        "help" => return Some(Command::Help),
        "quit" | "exit" => return Some(Command::Quit),
        other => {
            eprintln!("unknown command {other:?}, try 'help'");
            None
        }
    };
    action.map(Command::Dispatch)
}

fn parse_index(arg: &str) -> Option<usize> {
    let index = arg.parse().ok();
    if index.is_none() {
        eprintln!("expected a todo index, got {arg:?}");
    }
    index
}

fn parse_bool(arg: &str) -> Option<bool> {
    let value = arg.parse().ok();
    if value.is_none() {
        eprintln!("expected true or false, got {arg:?}");
    }
    value
}

fn print_summary(store: &TodoStore) {
    store.state(|state| {
        for (index, todo) in state.todos.iter().enumerate() {
            let status = if todo.completed { "x" } else { " " };
            let editing = if state.edit_index == Some(index) {
                " (editing)"
            } else {
                ""
            };
            println!("  {index}. [{status}] {}{editing}", todo.title);
        }
        println!("  {} item left, filter: {}", state.active_count(), state.filter);
    });
}

fn print_help() {
    println!("commands:");
    println!("  add <title>            append a todo");
    println!("  toggle <index>         flip a todo's completed flag");
    println!("  toggle-all <bool>      set every completed flag");
    println!("  destroy <index>        remove a todo");
    println!("  filter <all|active|completed>");
    println!("  clear                  drop completed todos");
    println!("  edit <index>           start editing a todo");
    println!("  end [title]            finish editing (empty title destroys)");
    println!("  cancel                 abandon the edit");
    println!("  show                   print the rendered HTML");
    println!("  quit");
}
