use crate::graph::{NodeFlags, TraversalAlgorithm};
use crate::sorting::ElementState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub accent: Color,    // Purple
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    accent: Color::Rgb(203, 166, 247),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
};

impl Theme {
    /// Bar colour for a sorting element
    pub fn element_color(&self, state: ElementState) -> Color {
        match state {
            ElementState::Normal => self.primary,
            ElementState::Pivot => self.error,
            ElementState::Comparing => self.warning,
            ElementState::Swapping | ElementState::Merging => self.accent,
            ElementState::Dividing => self.secondary,
            ElementState::Sorted => self.success,
        }
    }

    /// Node colour for a graph node; the frontier is blue for BFS, red for DFS
    pub fn node_color(&self, flags: &NodeFlags, algorithm: TraversalAlgorithm) -> Color {
        if flags.current {
            self.warning
        } else if flags.on_path {
            self.primary
        } else if flags.visited {
            self.success
        } else if flags.in_frontier {
            match algorithm {
                TraversalAlgorithm::Dfs => self.error,
                _ => self.primary,
            }
        } else {
            self.comment
        }
    }
}
