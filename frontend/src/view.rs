/// The two top-level compositions of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Airport,
}

impl View {
    pub const ALL: [View; 2] = [View::Home, View::Airport];

    /// Text on the navigation pill that selects this view.
    pub fn nav_label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Airport => "LAX",
        }
    }

    /// Key of the swapped content region; a different key remounts it.
    pub fn key(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Airport => "airport",
        }
    }

    /// The view to switch to when `next` is picked while `self` is showing.
    /// `None` when it is already showing, so nothing remounts.
    pub fn select(self, next: View) -> Option<View> {
        (self != next).then_some(next)
    }

    pub fn toggled(self) -> View {
        match self {
            View::Home => View::Airport,
            View::Airport => View::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn toggling_twice_returns_to_the_same_view() {
        for view in View::ALL {
            assert_eq!(view.toggled().toggled(), view);
            assert_ne!(view.toggled(), view);
        }
    }

    #[test]
    fn picking_lax_from_home_switches_to_airport() {
        assert_eq!(View::Home.select(View::Airport), Some(View::Airport));
        assert_eq!(View::Airport.select(View::Home), Some(View::Home));
    }

    #[test]
    fn picking_the_showing_view_changes_nothing() {
        for view in View::ALL {
            assert_eq!(view.select(view), None);
        }
    }

    #[test]
    fn keys_are_distinct() {
        assert_ne!(View::Home.key(), View::Airport.key());
        assert_eq!(View::Airport.nav_label(), "LAX");
    }
}
