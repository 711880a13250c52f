//! Named views reachable by path

use std::fmt;

/// A view of the application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Structures,
    Sorting,
    Search,
    Compare,
    /// Any path that matches no view
    NotFound(String),
}

impl Route {
    /// The four topic sections listed on the home view
    pub const SECTIONS: [Route; 4] = [
        Route::Structures,
        Route::Sorting,
        Route::Search,
        Route::Compare,
    ];

    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/" | "" => Route::Home,
            "/structures" => Route::Structures,
            "/sorting" => Route::Sorting,
            "/search" => Route::Search,
            "/compare" => Route::Compare,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Structures => "/structures",
            Route::Sorting => "/sorting",
            Route::Search => "/search",
            Route::Compare => "/compare",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "AlgoViz",
            Route::Structures => "Data Structures",
            Route::Sorting => "Sorting Algorithms",
            Route::Search => "Search Algorithms",
            Route::Compare => "Compare & Analysis",
            Route::NotFound(_) => "Not Found",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Route::Home => "Learn data structures and algorithms step by step",
            Route::Structures => "Linked lists, trees, stacks and queues",
            Route::Sorting => "Quick Sort and Merge Sort, frame by frame",
            Route::Search => "BFS, DFS and Dijkstra on a small graph",
            Route::Compare => "Complexities and counted operations side by side",
            Route::NotFound(_) => "This page does not exist",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::SECTIONS.iter().chain([Route::Home].iter()) {
            assert_eq!(&Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/sorting/"), Route::Sorting);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            Route::from_path("/graphs"),
            Route::NotFound("/graphs".to_string())
        );
    }
}
