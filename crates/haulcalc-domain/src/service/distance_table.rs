//! Known-route distance lookup

use std::collections::HashMap;

/// Static mapping from an ordered (origin, destination) pair to a known
/// mileage.
///
/// Lookup is exact-string match; callers supply canonical names. The table
/// is read-only at computation time.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    routes: HashMap<(String, String), f64>,
}

impl DistanceTable {
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Table seeded with the built-in known routes.
    pub fn with_known_routes() -> Self {
        let mut table = Self::empty();
        table.insert("Atlanta, GA", "Macon, GA", 84.0);
        table.insert("Atlanta, GA", "Savannah, GA", 248.0);
        table.insert("Macon, GA", "Savannah, GA", 165.0);
        table
    }

    pub fn insert(&mut self, origin: &str, destination: &str, miles: f64) {
        self.routes
            .insert((origin.to_string(), destination.to_string()), miles);
    }

    pub fn get(&self, origin: &str, destination: &str) -> Option<f64> {
        self.routes
            .get(&(origin.to_string(), destination.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// All known routes, sorted by origin then destination for stable
    /// listing output.
    pub fn routes(&self) -> Vec<(&str, &str, f64)> {
        let mut routes: Vec<(&str, &str, f64)> = self
            .routes
            .iter()
            .map(|((o, d), m)| (o.as_str(), d.as_str(), *m))
            .collect();
        routes.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        routes
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::with_known_routes()
    }
}
