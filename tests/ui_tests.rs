// Smoke tests for the terminal UI, rendered into a test backend

use algoviz::compare::Algorithm;
use algoviz::config::Config;
use algoviz::graph::TraversalAlgorithm;
use algoviz::sorting::SortAlgorithm;
use algoviz::ui::{App, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

fn app(view: &str) -> App {
    App::new(Config {
        start_view: view.to_string(),
        seed: Some(7),
        step_delay: Duration::from_millis(10),
        ..Config::default()
    })
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_every_view_renders() {
    for (view, expected) in [
        ("/", "AlgoViz"),
        ("/structures", "Data Structures"),
        ("/sorting", "Sorting Algorithms"),
        ("/search", "Search Algorithms"),
        ("/compare", "Catalog"),
        ("/nowhere", "Page not found"),
    ] {
        let mut app = app(view);
        let text = screen(&mut app);
        assert!(text.contains(expected), "{view} did not show {expected}");
    }
}

#[test]
fn test_home_navigation() {
    let mut app = app("/");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route, Route::Sorting);
    assert_eq!(app.input, "64,34,25,12,22,11,90");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route, Route::Home);

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.route, Route::Compare);
}

#[test]
fn test_structure_insert_and_invalid_input() {
    let mut app = app("/structures");
    type_text(&mut app, "42");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.notifications.latest().map(|n| n.title.as_str()), Some("Node added"));
    assert!(app.input.is_empty());
    assert_eq!(app.structure().len(), 1);

    press(&mut app, KeyCode::Enter);
    assert!(app.notifications.latest().is_some_and(|n| n.is_error()));
    assert!(app.status_is_error);
    assert_eq!(app.structure().len(), 1);

    assert!(screen(&mut app).contains("[ 42 ]"));
}

#[test]
fn test_input_drafts_follow_tabs() {
    let mut app = app("/search");
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Tab);
    assert!(app.input.is_empty());
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.input, "3");
}

#[test]
fn test_traversal_runs_to_completion() {
    let mut app = app("/search");
    type_text(&mut app, "0");
    press(&mut app, KeyCode::Enter);
    assert!(app.traversal().is_running());

    let start = Instant::now();
    for step in 0..200u64 {
        app.tick(start + Duration::from_millis(20 * step));
    }
    assert!(!app.traversal().is_running());
    let latest = app.notifications.latest().unwrap();
    assert_eq!(latest.title, "BFS complete");
    assert!(screen(&mut app).contains("Order:"));
}

#[test]
fn test_sort_plays_to_completion() {
    let mut app = app("/sorting");
    press(&mut app, KeyCode::Char('s'));
    assert!(app.sort().is_playing());

    let start = Instant::now();
    for step in 1..2_000u64 {
        app.tick(start + Duration::from_millis(600 * step));
        if !app.sort().is_playing() {
            break;
        }
    }
    assert_eq!(
        app.notifications.latest().map(|n| n.title.as_str()),
        Some("Sorting complete")
    );
    assert!(screen(&mut app).contains("Sorting complete"));
}

#[test]
fn test_single_element_sort_reports_completion() {
    let mut app = App::new(Config {
        start_view: "/sorting".to_string(),
        array_input: Some("42".to_string()),
        ..Config::default()
    });
    press(&mut app, KeyCode::Char('s'));
    assert!(!app.sort().is_playing());
    let latest = app.notifications.latest().unwrap();
    assert_eq!(latest.title, "Sorting complete");
    assert_eq!(latest.description, "Quick Sort finished in 1 step");
}

#[test]
fn test_sorting_status_bar_lists_home_key() {
    let mut app = app("/sorting");
    let text = screen(&mut app);
    let status = text.lines().last().unwrap();
    assert!(status.contains(" esc "), "status bar was {status:?}");
    assert!(status.contains(" home "));
    assert!(status.contains(" reset "));
}

#[test]
fn test_compare_starts_with_configured_algorithms() {
    let app = App::new(Config {
        start_view: "/compare".to_string(),
        seed: Some(7),
        compare: (
            Algorithm::Traversal(TraversalAlgorithm::Dfs),
            Algorithm::Sort(SortAlgorithm::MergeSort),
        ),
        ..Config::default()
    });
    assert_eq!(
        app.compare_state().first,
        Algorithm::Traversal(TraversalAlgorithm::Dfs)
    );
    assert_eq!(app.compare_state().second, Algorithm::Sort(SortAlgorithm::MergeSort));
}

#[test]
fn test_compare_reports_winner() {
    let mut app = app("/compare");
    press(&mut app, KeyCode::Enter);
    assert!(app.compare_state().result.is_some());
    assert_eq!(
        app.notifications.latest().map(|n| n.title.as_str()),
        Some("Comparison complete")
    );
    assert!(screen(&mut app).contains("ops"));
}

#[test]
fn test_quit_keys() {
    let mut app = app("/");
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = self::app("/sorting");
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}
