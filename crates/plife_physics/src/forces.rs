use plife_core::{Particle, STRENGTH_DIVISOR, SimConfig};

use crate::particle::ParticleGroup;

/// Scalar inputs of one rule application, taken from the parameter set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    /// Matrix cell in UI units; positive repels, negative attracts
    pub strength: f64,
    /// Falloff shape; 0 is plain inverse distance
    pub exponent: f64,
    /// Fraction of velocity discarded per application, in [0, 1]
    pub friction: f64,
}

/// Force on a particle at `a` from a particle at `b`.
/// Returns zero for coincident pairs, pairs whose rescaled distance
/// underflows, and pairs at or past the cutoff.
pub fn pair_force(a: &Particle, b: &Particle, interaction: &Interaction, config: &SimConfig) -> [f64; 2] {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let d2 = dx * dx + dy * dy;
    let limit = config.distance_limit;
    if d2 == 0.0 || d2 >= limit * limit {
        return [0.0, 0.0];
    }

    let d = d2.sqrt();
    let scale = config.distance_scale;
    let d_eff = scale * (d / scale).powf(interaction.exponent + 1.0);
    // Steep falloff can underflow a tiny distance to zero or a subnormal.
    if !(d_eff >= f64::MIN_POSITIVE) {
        return [0.0, 0.0];
    }
    let f = (interaction.strength / STRENGTH_DIVISOR) / d_eff;
    [f * dx, f * dy]
}

/// Net force on every receiver from every sender, written to `out`.
/// Reads both slices only; nothing moves until the caller integrates.
pub fn accumulate(
    receivers: &[Particle],
    senders: &[Particle],
    interaction: &Interaction,
    config: &SimConfig,
    out: &mut Vec<[f64; 2]>,
) {
    out.clear();
    out.resize(receivers.len(), [0.0, 0.0]);
    if interaction.strength == 0.0 {
        return;
    }

    for (a, acc) in receivers.iter().zip(out.iter_mut()) {
        for b in senders {
            let [fx, fy] = pair_force(a, b, interaction, config);
            acc[0] += fx;
            acc[1] += fy;
        }
    }
}

/// Damp, add the impulse, move, then reflect off the domain edges.
/// Friction is applied to the old velocity before the impulse is added.
pub fn integrate(p: &mut Particle, force: [f64; 2], friction: f64, config: &SimConfig) {
    let keep = 1.0 - friction;
    p.vx = p.vx * keep + force[0];
    p.vy = p.vy * keep + force[1];
    p.x += p.vx;
    p.y += p.vy;
    reflect(&mut p.x, &mut p.vx, config.width);
    reflect(&mut p.y, &mut p.vy, config.height);
}

/// Mirror an overshoot back into `[0, extent]` and reverse the velocity.
pub fn reflect(pos: &mut f64, vel: &mut f64, extent: f64) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = -*vel;
    } else if *pos >= extent {
        *pos = 2.0 * extent - *pos;
        *vel = -*vel;
    }

    // Overshoot wider than the whole domain: keep folding.
    if !(0.0..=extent).contains(pos) && pos.is_finite() {
        let period = 2.0 * extent;
        let folded = pos.rem_euclid(period);
        if folded <= extent {
            *pos = folded;
        } else {
            *pos = period - folded;
            *vel = -*vel;
        }
    }
}

/// Applies one (receiver, sender) rule. Owns the force buffer so a tick
/// does not allocate once groups have reached their size.
#[derive(Debug, Default)]
pub struct ForceRule {
    forces: Vec<[f64; 2]>,
}

impl ForceRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// `senders` acting on `receivers` (two different groups)
    pub fn apply(
        &mut self,
        receivers: &mut ParticleGroup,
        senders: &ParticleGroup,
        interaction: &Interaction,
        config: &SimConfig,
    ) {
        accumulate(receivers.particles(), senders.particles(), interaction, config, &mut self.forces);
        self.integrate_all(receivers, interaction.friction, config);
    }

    /// A group acting on itself. Every particle sees the positions from
    /// before this call, never a neighbour that has already moved.
    pub fn apply_self(&mut self, group: &mut ParticleGroup, interaction: &Interaction, config: &SimConfig) {
        accumulate(group.particles(), group.particles(), interaction, config, &mut self.forces);
        self.integrate_all(group, interaction.friction, config);
    }

    fn integrate_all(&self, group: &mut ParticleGroup, friction: f64, config: &SimConfig) {
        for (p, &force) in group.particles_mut().iter_mut().zip(&self.forces) {
            integrate(p, force, friction, config);
        }
    }
}
