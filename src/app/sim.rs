use eframe::egui::{Vec2, vec2};

const ALPHA_MIN: f32 = 0.001;
const ALPHA_DECAY: f32 = 0.0228;
const VELOCITY_RETAIN: f32 = 0.6;
const CHARGE_STRENGTH: f32 = -400.0;
const SPRING_LENGTH: f32 = 150.0;
const SPRING_STRENGTH: f32 = 0.5;
const CENTER_STRENGTH: f32 = 0.05;
const COLLIDE_RADIUS: f32 = 50.0;
const INITIAL_RADIUS: f32 = 10.0;
const INITIAL_ANGLE: f32 = 2.399_963;

pub(in crate::app) struct SimNode {
    pub(in crate::app) pos: Vec2,
    pub(in crate::app) velocity: Vec2,
    pub(in crate::app) pin: Option<Vec2>,
    pub(in crate::app) radius: f32,
}

pub(in crate::app) struct Simulation {
    nodes: Vec<SimNode>,
    edges: Vec<(usize, usize)>,
    center: Vec2,
    alpha: f32,
    alpha_target: f32,
}

impl Simulation {
    pub(in crate::app) fn new(node_count: usize, edges: Vec<(usize, usize)>, center: Vec2) -> Self {
        let nodes = (0..node_count)
            .map(|index| {
                let radius = INITIAL_RADIUS * (0.5 + index as f32).sqrt();
                let angle = index as f32 * INITIAL_ANGLE;
                SimNode {
                    pos: center + vec2(radius * angle.cos(), radius * angle.sin()),
                    velocity: Vec2::ZERO,
                    pin: None,
                    radius: COLLIDE_RADIUS,
                }
            })
            .collect();

        Self {
            nodes,
            edges,
            center,
            alpha: 1.0,
            alpha_target: 0.0,
        }
    }

    pub(in crate::app) fn step(&mut self) -> bool {
        if self.idle() {
            return false;
        }

        self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;
        if self.alpha < ALPHA_MIN {
            return false;
        }

        self.apply_repulsion();
        self.apply_springs();
        self.apply_center_pull();
        self.integrate();
        self.resolve_collisions();

        true
    }

    pub(in crate::app) fn idle(&self) -> bool {
        self.alpha < ALPHA_MIN && self.alpha_target < ALPHA_MIN
    }

    pub(in crate::app) fn alpha(&self) -> f32 {
        self.alpha
    }

    pub(in crate::app) fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    pub(in crate::app) fn reheat(&mut self, alpha: f32) {
        self.alpha = self.alpha.max(alpha.clamp(0.0, 1.0));
    }

    pub(in crate::app) fn set_alpha_target(&mut self, target: f32) {
        self.alpha_target = target.clamp(0.0, 1.0);
    }

    pub(in crate::app) fn pin(&mut self, index: usize, pos: Vec2) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.pin = Some(pos);
        }
    }

    pub(in crate::app) fn unpin(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.pin = None;
        }
    }

    pub(in crate::app) fn recenter(&mut self, center: Vec2) {
        self.center = center;
    }

    fn apply_repulsion(&mut self) {
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let mut delta = self.nodes[j].pos - self.nodes[i].pos;
                if delta.length_sq() <= 0.0001 {
                    delta = jiggle(i, j);
                }
                let distance_sq = delta.length_sq().max(1.0);

                let push = delta * (CHARGE_STRENGTH * self.alpha / distance_sq);
                self.nodes[i].velocity += push;
                self.nodes[j].velocity -= push;
            }
        }
    }

    fn apply_springs(&mut self) {
        let node_count = self.nodes.len();
        for &(source, target) in &self.edges {
            if source >= node_count || target >= node_count || source == target {
                continue;
            }

            let mut delta = self.nodes[target].pos - self.nodes[source].pos;
            if delta.length_sq() <= 0.0001 {
                delta = jiggle(source, target);
            }
            let distance = delta.length();

            let displacement = (distance - SPRING_LENGTH) / distance * SPRING_STRENGTH * self.alpha;
            let correction = delta * (displacement * 0.5);
            self.nodes[source].velocity += correction;
            self.nodes[target].velocity -= correction;
        }
    }

    fn apply_center_pull(&mut self) {
        let center = self.center;
        let pull = CENTER_STRENGTH * self.alpha;
        for node in &mut self.nodes {
            node.velocity += (center - node.pos) * pull;
        }
    }

    fn integrate(&mut self) {
        for node in &mut self.nodes {
            if let Some(pin) = node.pin {
                node.pos = pin;
                node.velocity = Vec2::ZERO;
                continue;
            }

            node.velocity *= VELOCITY_RETAIN;
            node.pos += node.velocity;
        }
    }

    // d3's forceCollide adjusts velocities; overlap is resolved positionally here.
    fn resolve_collisions(&mut self) {
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let delta = self.nodes[j].pos - self.nodes[i].pos;
                let min_distance = self.nodes[i].radius + self.nodes[j].radius;
                let distance_sq = delta.length_sq();
                if distance_sq >= min_distance * min_distance {
                    continue;
                }

                let distance = distance_sq.sqrt();
                let direction = if distance > 0.0001 {
                    delta / distance
                } else {
                    jiggle(i, j)
                };
                let overlap = min_distance - distance;

                match (self.nodes[i].pin.is_some(), self.nodes[j].pin.is_some()) {
                    (false, false) => {
                        let shift = direction * (overlap * 0.5);
                        self.nodes[i].pos -= shift;
                        self.nodes[j].pos += shift;
                    }
                    (true, false) => self.nodes[j].pos += direction * overlap,
                    (false, true) => self.nodes[i].pos -= direction * overlap,
                    (true, true) => {}
                }
            }
        }
    }
}

fn jiggle(a: usize, b: usize) -> Vec2 {
    let angle = ((a as f32) * 0.618_034 + (b as f32) * 0.414_214) * std::f32::consts::TAU;
    vec2(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(sim: &Simulation, a: usize, b: usize) -> f32 {
        (sim.nodes()[a].pos - sim.nodes()[b].pos).length()
    }

    fn centroid(sim: &Simulation) -> Vec2 {
        let mut sum = Vec2::ZERO;
        for node in sim.nodes() {
            sum += node.pos;
        }
        sum / sim.nodes().len() as f32
    }

    #[test]
    fn repulsion_and_collision_separate_a_crowded_pair() {
        let mut sim = Simulation::new(2, Vec::new(), vec2(400.0, 300.0));
        let before = distance(&sim, 0, 1);
        assert!(before < 2.0 * COLLIDE_RADIUS);

        assert!(sim.step());
        assert!(distance(&sim, 0, 1) >= 2.0 * COLLIDE_RADIUS - 0.1);

        for _ in 0..50 {
            sim.step();
        }
        assert!(distance(&sim, 0, 1) > before);
    }

    #[test]
    fn springs_pull_a_distant_linked_node_inward() {
        let mut sim = Simulation::new(2, vec![(0, 1)], Vec2::ZERO);
        sim.pin(0, Vec2::ZERO);
        sim.pin(1, vec2(600.0, 0.0));
        sim.step();
        sim.unpin(1);

        for _ in 0..200 {
            sim.step();
        }

        let settled = distance(&sim, 0, 1);
        assert!(settled < 300.0, "node was not pulled inward: {settled}");
        assert!(settled > 95.0, "collision floor was violated: {settled}");
    }

    #[test]
    fn step_goes_idle_and_stops_mutating() {
        let mut sim = Simulation::new(4, vec![(0, 1), (1, 2), (2, 3)], vec2(400.0, 300.0));

        let mut steps = 0;
        while sim.step() {
            steps += 1;
            assert!(steps < 2000, "simulation never settled");
        }
        assert!(steps >= 100);
        assert!(sim.idle());

        let snapshot: Vec<Vec2> = sim.nodes().iter().map(|node| node.pos).collect();
        assert!(!sim.step());
        for (node, before) in sim.nodes().iter().zip(&snapshot) {
            assert_eq!(node.pos, *before);
        }
    }

    #[test]
    fn drag_target_keeps_layout_live_and_release_settles_it() {
        let mut sim = Simulation::new(3, vec![(0, 1), (1, 2)], vec2(400.0, 300.0));

        sim.set_alpha_target(0.3);
        for _ in 0..400 {
            assert!(sim.step());
        }

        sim.set_alpha_target(0.0);
        assert!(sim.step(), "layout must stay warm right after release");
        assert!(sim.alpha() > ALPHA_MIN);

        let mut steps = 0;
        while sim.step() {
            steps += 1;
            assert!(steps < 2000, "layout froze hot instead of settling");
        }
        assert!(sim.idle());
    }

    #[test]
    fn pinned_node_holds_position_and_still_repels() {
        let mut sim = Simulation::new(2, Vec::new(), vec2(400.0, 300.0));
        let hold = sim.nodes()[0].pos;
        sim.pin(0, hold);

        for _ in 0..30 {
            sim.step();
        }

        assert_eq!(sim.nodes()[0].pos, hold);
        assert_eq!(sim.nodes()[0].velocity, Vec2::ZERO);
        assert!(distance(&sim, 0, 1) >= 2.0 * COLLIDE_RADIUS - 0.1);
    }

    #[test]
    fn recenter_moves_the_pull_not_the_nodes() {
        let mut sim = Simulation::new(3, vec![(0, 1)], vec2(400.0, 300.0));
        for _ in 0..50 {
            sim.step();
        }

        let snapshot: Vec<Vec2> = sim.nodes().iter().map(|node| node.pos).collect();
        let new_center = vec2(1000.0, 100.0);
        sim.recenter(new_center);
        for (node, before) in sim.nodes().iter().zip(&snapshot) {
            assert_eq!(node.pos, *before);
        }

        sim.reheat(0.3);
        assert!(sim.alpha() >= 0.3);

        let offset_before = (centroid(&sim) - new_center).length();
        for _ in 0..200 {
            sim.step();
        }
        assert!((centroid(&sim) - new_center).length() < offset_before);
    }

    #[test]
    fn empty_layout_settles_without_any_nodes() {
        let mut sim = Simulation::new(0, Vec::new(), vec2(400.0, 300.0));
        assert!(sim.nodes().is_empty());

        let mut steps = 0;
        while sim.step() {
            steps += 1;
            assert!(steps < 2000, "empty layout never settled");
        }
        assert!(sim.idle());
        assert!(!sim.step());
    }

    #[test]
    fn reheat_raises_but_never_lowers_alpha() {
        let mut sim = Simulation::new(2, Vec::new(), vec2(400.0, 300.0));
        assert_eq!(sim.alpha(), 1.0);
        sim.reheat(0.3);
        assert_eq!(sim.alpha(), 1.0);

        for _ in 0..120 {
            sim.step();
        }
        assert!(sim.alpha() < 0.3);

        sim.reheat(0.3);
        assert!((sim.alpha() - 0.3).abs() < 1e-6);
    }
}
