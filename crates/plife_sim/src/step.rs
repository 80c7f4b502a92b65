use plife_core::{GROUP_COUNT, GroupColor, ParameterSet, SimConfig};
use plife_physics::{ForceRule, Interaction, ParticleGroup};
use rand::Rng;

/// Advance every group by one tick.
///
/// Groups are first resized to their target counts, then each ordered
/// (receiver, sender) pair is applied row-major, receiver outermost.
/// A pair only writes to the receiver group.
pub fn tick(
    params: &ParameterSet,
    groups: &mut [ParticleGroup; GROUP_COUNT],
    config: &SimConfig,
    rng: &mut impl Rng,
    rule: &mut ForceRule,
) {
    for (group, &target) in groups.iter_mut().zip(params.counts()) {
        group.resize(target, config, rng);
    }

    for receiver in GroupColor::ALL {
        for sender in GroupColor::ALL {
            let interaction = Interaction {
                strength: params.strength(receiver, sender),
                exponent: params.exponent(),
                friction: params.friction(),
            };
            if receiver == sender {
                rule.apply_self(&mut groups[receiver.index()], &interaction, config);
            } else {
                let (receivers, senders) = pair_mut(groups, receiver.index(), sender.index());
                rule.apply(receivers, senders, &interaction, config);
            }
        }
    }
}

/// Borrow two distinct groups, one mutably
fn pair_mut(
    groups: &mut [ParticleGroup],
    receiver: usize,
    sender: usize,
) -> (&mut ParticleGroup, &ParticleGroup) {
    debug_assert_ne!(receiver, sender);
    if receiver < sender {
        let (head, tail) = groups.split_at_mut(sender);
        (&mut head[receiver], &tail[0])
    } else {
        let (head, tail) = groups.split_at_mut(receiver);
        (&mut tail[0], &head[sender])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plife_core::{Particle, Preset};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(params: &ParameterSet, groups: &mut [ParticleGroup; GROUP_COUNT], seed: u64, ticks: usize) {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut rule = ForceRule::new();
        for _ in 0..ticks {
            tick(params, groups, &config, &mut rng, &mut rule);
        }
    }

    #[test]
    fn test_groups_match_counts_after_tick() {
        let params = Preset::Hunar.params();
        let mut groups = ParticleGroup::all_colors();
        run(&params, &mut groups, 1, 1);
        for (group, &count) in groups.iter().zip(params.counts()) {
            assert_eq!(group.len(), count as usize);
        }
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut params = Preset::Quartet.params();
        params.set_count(GroupColor::Red, 60);
        params.set_count(GroupColor::Yellow, 60);
        params.set_count(GroupColor::Green, 60);
        params.set_count(GroupColor::Blue, 60);

        let mut a = ParticleGroup::all_colors();
        let mut b = ParticleGroup::all_colors();
        run(&params, &mut a, 77, 15);
        run(&params, &mut b, 77, 15);
        assert_eq!(a, b);
    }

    #[test]
    fn test_positions_stay_finite_and_inside() {
        let mut params = Preset::Cells.params();
        params.set_count(GroupColor::Yellow, 300);
        let mut groups = ParticleGroup::all_colors();
        run(&params, &mut groups, 5, 40);
        for group in &groups {
            for p in group.particles() {
                assert!(p.is_finite());
                assert!((0.0..=500.0).contains(&p.x) && (0.0..=500.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_self_repulsion_pushes_pair_apart() {
        let mut params = ParameterSet::zeroed();
        params.set_friction(0.5);
        params.set_count(GroupColor::Red, 2);
        params.set_strength(GroupColor::Red, GroupColor::Red, 100.0);

        let mut groups = ParticleGroup::all_colors();
        groups[0] = ParticleGroup::from_particles(
            GroupColor::Red,
            vec![Particle::at(250.0, 250.0), Particle::at(260.0, 250.0)],
        );
        run(&params, &mut groups, 0, 1);

        let red = groups[0].particles();
        assert!(red[0].vx < 0.0);
        assert!(red[1].x - red[0].x > 10.0);
        assert_eq!(red[0].y, 250.0);
    }

    #[test]
    fn test_out_of_range_pair_does_not_interact() {
        let mut params = ParameterSet::zeroed();
        params.set_friction(0.5);
        params.set_count(GroupColor::Red, 2);
        params.set_strength(GroupColor::Red, GroupColor::Red, 100.0);

        let mut groups = ParticleGroup::all_colors();
        let start = vec![Particle::at(10.0, 250.0), Particle::at(490.0, 250.0)];
        groups[0] = ParticleGroup::from_particles(GroupColor::Red, start.clone());
        run(&params, &mut groups, 0, 1);
        assert_eq!(groups[0].particles(), start.as_slice());
    }

    #[test]
    fn test_cross_pair_moves_only_receiver() {
        let mut params = ParameterSet::zeroed();
        params.set_count(GroupColor::Red, 1);
        params.set_count(GroupColor::Blue, 1);
        params.set_strength(GroupColor::Red, GroupColor::Blue, -100.0);

        let mut groups = ParticleGroup::all_colors();
        groups[0] = ParticleGroup::from_particles(GroupColor::Red, vec![Particle::at(100.0, 100.0)]);
        groups[3] = ParticleGroup::from_particles(GroupColor::Blue, vec![Particle::at(120.0, 100.0)]);
        run(&params, &mut groups, 0, 1);

        assert!(groups[0].particles()[0].x > 100.0);
        assert_eq!(groups[3].particles()[0], Particle::at(120.0, 100.0));
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut groups = ParticleGroup::all_colors();
        let (r, s) = pair_mut(&mut groups, 0, 3);
        assert_eq!((r.color(), s.color()), (GroupColor::Red, GroupColor::Blue));
        let (r, s) = pair_mut(&mut groups, 2, 1);
        assert_eq!((r.color(), s.color()), (GroupColor::Green, GroupColor::Yellow));
    }
}
