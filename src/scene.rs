//! Editable antenna scene.
//!
//! A [`Scene`] is the model behind an interactive multilateration editor:
//! an ordered list of antennas plus the one currently grabbed by the user.
//! The selection lives here and never on the circles, so every estimation
//! pass sees a plain snapshot of centers and radii.
//!
//! # Example
//!
//! ```
//! use multilat::primitives::Point2;
//! use multilat::scene::Scene;
//!
//! let mut scene = Scene::demo();
//! assert_eq!(scene.len(), 3);
//!
//! // Grab the antenna at (150, 400) and drag it
//! assert_eq!(scene.select_at(Point2::new(160.0, 410.0)), Some(0));
//! scene.move_selected(Point2::new(170.0, 380.0)).unwrap();
//! scene.release();
//!
//! let pass = scene.compute();
//! assert!(pass.density.is_some());
//! ```

use crate::config::SceneConfig;
use crate::error::{MultilatError, Result};
use crate::pipeline::{compute_pass, PassResult};
use crate::primitives::{Circle2, Point2};

/// An ordered set of antennas with an optional selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    config: SceneConfig,
    antennas: Vec<Circle2<f64>>,
    selected: Option<usize>,
}

fn check_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(MultilatError::InvalidRadius { radius })
    }
}

fn check_point(p: Point2<f64>) -> Result<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(MultilatError::NonFinite)
    }
}

impl Scene {
    /// Creates an empty scene.
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            antennas: Vec::new(),
            selected: None,
        })
    }

    /// Creates a scene holding the given antennas.
    pub fn with_antennas(config: SceneConfig, antennas: Vec<Circle2<f64>>) -> Result<Self> {
        for antenna in &antennas {
            check_point(antenna.center)?;
            check_radius(antenna.radius)?;
        }
        let mut scene = Self::new(config)?;
        scene.antennas = antennas;
        Ok(scene)
    }

    /// The starting layout: three overlapping antennas on a 640×640 field.
    pub fn demo() -> Self {
        Self {
            config: SceneConfig::default(),
            antennas: vec![
                Circle2::from_coords(150.0, 400.0, 150.0),
                Circle2::from_coords(320.0, 200.0, 150.0),
                Circle2::from_coords(450.0, 450.0, 180.0),
            ],
            selected: None,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Returns the antennas in insertion order.
    pub fn antennas(&self) -> &[Circle2<f64>] {
        &self.antennas
    }

    pub fn len(&self) -> usize {
        self.antennas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.antennas.is_empty()
    }

    /// Returns the index of the selected antenna.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Appends an antenna at `at` with the configured default radius and
    /// returns its index.
    pub fn add_antenna(&mut self, at: Point2<f64>) -> Result<usize> {
        check_point(at)?;
        self.antennas.push(Circle2::new(at, self.config.default_radius));
        let index = self.antennas.len() - 1;
        tracing::debug!(index, x = at.x, y = at.y, "antenna added");
        Ok(index)
    }

    /// Selects the first antenna whose disc contains `point`, boundary
    /// included. Clears the selection when nothing is hit.
    pub fn select_at(&mut self, point: Point2<f64>) -> Option<usize> {
        self.selected = self.antennas.iter().position(|a| a.contains(point));
        self.selected
    }

    /// Clears the selection.
    pub fn release(&mut self) {
        self.selected = None;
    }

    fn selected_mut(&mut self) -> Result<&mut Circle2<f64>> {
        let index = self.selected.ok_or(MultilatError::NoSelection)?;
        self.antennas
            .get_mut(index)
            .ok_or(MultilatError::NoSelection)
    }

    /// Moves the selected antenna's center to `to`.
    pub fn move_selected(&mut self, to: Point2<f64>) -> Result<()> {
        check_point(to)?;
        self.selected_mut()?.center = to;
        Ok(())
    }

    /// Grows the selected antenna by one resize step and returns the new
    /// radius.
    pub fn grow_selected(&mut self) -> Result<f64> {
        let step = self.config.resize_step;
        let antenna = self.selected_mut()?;
        antenna.radius += step;
        tracing::debug!(radius = antenna.radius, "antenna grown");
        Ok(antenna.radius)
    }

    /// Shrinks the selected antenna by one resize step, but not below one
    /// step, and returns the new radius.
    pub fn shrink_selected(&mut self) -> Result<f64> {
        let step = self.config.resize_step;
        let antenna = self.selected_mut()?;
        antenna.radius = step.max(antenna.radius - step);
        tracing::debug!(radius = antenna.radius, "antenna shrunk");
        Ok(antenna.radius)
    }

    /// Sets the radius of the antenna at `index`.
    pub fn set_radius(&mut self, index: usize, radius: f64) -> Result<()> {
        check_radius(radius)?;
        let len = self.antennas.len();
        let antenna = self
            .antennas
            .get_mut(index)
            .ok_or(MultilatError::IndexOutOfRange { index, len })?;
        antenna.radius = radius;
        Ok(())
    }

    /// Runs one estimation pass over the current antennas.
    pub fn compute(&self) -> PassResult<f64> {
        compute_pass(&self.antennas)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty() {
        let scene = Scene::new(SceneConfig::default()).unwrap();
        assert!(scene.is_empty());
        assert_eq!(scene.selected(), None);
        assert!(!scene.compute().has_estimate());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = SceneConfig {
            resize_step: -5.0,
            ..SceneConfig::default()
        };
        assert!(Scene::new(config).is_err());
    }

    #[test]
    fn test_with_antennas_validates() {
        let bad = vec![Circle2::from_coords(0.0, 0.0, -1.0)];
        assert!(matches!(
            Scene::with_antennas(SceneConfig::default(), bad),
            Err(MultilatError::InvalidRadius { .. })
        ));

        let bad = vec![Circle2::from_coords(f64::NAN, 0.0, 1.0)];
        assert!(matches!(
            Scene::with_antennas(SceneConfig::default(), bad),
            Err(MultilatError::NonFinite)
        ));
    }

    #[test]
    fn test_add_antenna_uses_default_radius() {
        let mut scene = Scene::demo();
        let index = scene.add_antenna(Point2::new(100.0, 100.0)).unwrap();
        assert_eq!(index, 3);
        assert_eq!(scene.antennas()[3], Circle2::from_coords(100.0, 100.0, 25.0));
    }

    #[test]
    fn test_add_antenna_grows_slots() {
        let mut scene = Scene::demo();
        let before = scene.compute().intersections.len();
        scene.add_antenna(Point2::new(300.0, 300.0)).unwrap();
        let after = scene.compute().intersections.len();
        assert_eq!(after, before + 2 * 3);
    }

    #[test]
    fn test_select_first_hit() {
        let mut scene = Scene::demo();
        // Inside antennas 0 and 1, the first one wins
        let both = Point2::new(250.0, 300.0);
        assert!(scene.antennas()[0].contains(both));
        assert!(scene.antennas()[1].contains(both));
        assert_eq!(scene.select_at(both), Some(0));

        assert_eq!(scene.select_at(Point2::new(620.0, 20.0)), None);
        assert_eq!(scene.selected(), None);
    }

    #[test]
    fn test_edits_require_selection() {
        let mut scene = Scene::demo();
        assert!(matches!(scene.grow_selected(), Err(MultilatError::NoSelection)));
        assert!(matches!(
            scene.move_selected(Point2::new(1.0, 1.0)),
            Err(MultilatError::NoSelection)
        ));
    }

    #[test]
    fn test_move_selected() {
        let mut scene = Scene::demo();
        scene.select_at(Point2::new(450.0, 450.0)).unwrap();
        scene.move_selected(Point2::new(400.0, 420.0)).unwrap();
        assert_eq!(scene.antennas()[2].center, Point2::new(400.0, 420.0));

        scene.release();
        assert!(scene.move_selected(Point2::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_resize_clamps_at_step() {
        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        scene.add_antenna(Point2::new(50.0, 50.0)).unwrap();
        scene.select_at(Point2::new(50.0, 50.0)).unwrap();

        assert_eq!(scene.grow_selected().unwrap(), 30.0);
        for _ in 0..10 {
            scene.shrink_selected().unwrap();
        }
        assert_eq!(scene.antennas()[0].radius, 5.0);
    }

    #[test]
    fn test_set_radius() {
        let mut scene = Scene::demo();
        scene.set_radius(1, 90.0).unwrap();
        assert_eq!(scene.antennas()[1].radius, 90.0);

        assert!(matches!(
            scene.set_radius(7, 1.0),
            Err(MultilatError::IndexOutOfRange { index: 7, len: 3 })
        ));
        assert!(scene.set_radius(0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_selection_does_not_affect_pass() {
        let mut scene = Scene::demo();
        let idle = scene.compute();
        scene.select_at(Point2::new(150.0, 400.0));
        assert_eq!(scene.compute(), idle);
    }
}
