//! Console tests
//!
//! Drive the terminal front end with in-memory input and inspect the text it
//! renders.

use sorteo_cli::{Command, Console, Flow};
use sorteo_core::{DrawPhase, Session, SessionConfig};
use sorteo_harness::SimEnv;

fn run_script(script: &str) -> (String, Console<SimEnv, Vec<u8>>) {
    run_script_with(script, SessionConfig::default())
}

fn run_script_with(script: &str, config: SessionConfig) -> (String, Console<SimEnv, Vec<u8>>) {
    let session = Session::with_config(SimEnv::with_seed(42), config);
    let mut console = Console::new(session, Vec::new());
    console.run(script.as_bytes()).unwrap_or_else(|e| unreachable!("console failed: {e}"));

    let output = String::from_utf8_lossy(console.writer()).into_owned();
    (output, console)
}

#[test]
fn names_are_listed_in_order() {
    let (output, console) = run_script("Ana\nBeto\nadd Cata\nlist\n");

    assert_eq!(console.session().roster().names().collect::<Vec<_>>(), ["Ana", "Beto", "Cata"]);
    assert!(output.contains("  1. Ana"));
    assert!(output.contains("  2. Beto"));
    assert!(output.contains("  3. Cata"));
    assert!(output.contains("[Draw a name]"));
}

#[test]
fn rejections_are_rendered_not_fatal() {
    let (output, console) = run_script("\nJohn3\nAna\nAna\ndraw\n");

    assert!(output.contains("Please enter a name."));
    assert!(output.contains("Please enter a valid name. Use only letters and spaces."));
    assert!(output.contains("You already added someone with that name, try another."));
    assert!(output.contains("Your secret friend is: Ana"));
    assert_eq!(console.session().roster().size(), 1);
}

#[test]
fn draw_before_names_asks_for_names() {
    let (output, console) = run_script("draw\n");

    assert!(output.contains("Please add a name first."));
    assert_eq!(console.session().phase(), DrawPhase::Empty);
}

#[test]
fn full_game_reaches_exhaustion_and_resets() {
    let (output, console) = run_script("Ana\nBeto\ndraw\ndraw\ndraw\nstatus\nreset\n");

    assert_eq!(output.matches("Your secret friend is:").count(), 2);
    assert!(output.contains("[Draw another name]"));
    assert!(output.contains("All 2 names have been drawn."));
    assert!(output.contains("Everyone has already been drawn. Type `reset` to start over."));
    assert!(output.contains("[Everyone has been drawn]"));
    assert!(output.contains("Type `reset` to start over."));
    assert!(output.contains("Game reset. The roster is empty."));

    assert_eq!(console.session().roster().size(), 0);
    assert!(!console.session().can_reset());
}

#[test]
fn latest_winner_and_drawn_names_are_marked() {
    let (output, console) = run_script("Ana\nBeto\nCata\ndraw\ndraw\nlist\n");

    let session = console.session();
    let latest = session.last_winner().unwrap_or_default().to_string();
    assert!(output.contains(&format!(". {latest}")));

    let last_listing: Vec<_> = output.lines().rev().take(4).collect();
    assert_eq!(last_listing.iter().filter(|l| l.starts_with('>')).count(), 1);
    assert_eq!(last_listing.iter().filter(|l| l.starts_with('*')).count(), 1);
}

#[test]
fn quit_stops_reading() {
    let (_, console) = run_script("Ana\nquit\nBeto\n");
    assert_eq!(console.session().roster().size(), 1);
}

#[test]
fn roster_limit_is_reported() {
    let config = SessionConfig { max_roster: Some(1), ..Default::default() };
    let (output, console) = run_script_with("Ana\nBeto\n", config);

    assert!(output.contains("The roster is full (1 names)."));
    assert_eq!(console.session().roster().size(), 1);
}

#[test]
fn interactive_console_prompts() {
    let session = Session::new(SimEnv::with_seed(0));
    let mut console = Console::interactive(session, Vec::new());
    console.run("Ana\n".as_bytes()).unwrap_or_else(|e| unreachable!("console failed: {e}"));

    let output = String::from_utf8_lossy(console.writer());
    assert!(output.starts_with("Add names, then draw."));
    assert!(output.contains("> Added Ana."));
    assert!(output.ends_with("> "));
}

#[test]
fn execute_returns_flow() {
    let mut console = Console::new(Session::new(SimEnv::with_seed(0)), Vec::new());

    assert!(matches!(console.execute(Command::Admit("Ana".to_string())), Ok(Flow::Continue)));
    assert!(matches!(console.execute(Command::Help), Ok(Flow::Continue)));
    assert!(matches!(console.execute(Command::Quit), Ok(Flow::Quit)));
}

#[test]
fn undecodable_line_is_rejected_and_reading_continues() {
    let session = Session::new(SimEnv::with_seed(0));
    let mut console = Console::new(session, Vec::new());
    console
        .run(&b"Ana\nJos\xe9\nBeto\n"[..])
        .unwrap_or_else(|e| unreachable!("console failed: {e}"));

    let output = String::from_utf8_lossy(console.writer());
    assert!(output.contains("Please enter a valid name. Use only letters and spaces."));
    assert_eq!(console.session().roster().names().collect::<Vec<_>>(), ["Ana", "Beto"]);
}

#[test]
fn add_with_tab_separator_admits_the_name() {
    let (_, console) = run_script("add\tAna\n");
    assert_eq!(console.session().roster().names().collect::<Vec<_>>(), ["Ana"]);
}
