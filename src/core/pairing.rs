use crate::domain::model::Pair;
use crate::domain::ports::RandomSource;

/// Assigns every participant a random receiver.
///
/// Givers keep the input order. Receivers are a shuffled copy of the input;
/// whenever a giver lines up with itself, that receiver is swapped with the
/// one in the next slot. The last slot has no successor, so a self-pair can
/// survive there.
pub fn create_pairs<T, R>(participants: &[T], rng: &mut R) -> Vec<Pair<T>>
where
    T: PartialEq + Clone,
    R: RandomSource + ?Sized,
{
    let mut receivers = participants.to_vec();
    rng.shuffle(&mut receivers);

    for i in 0..participants.len() {
        if participants[i] == receivers[i] && i + 1 < receivers.len() {
            receivers.swap(i, i + 1);
        }
    }

    participants
        .iter()
        .cloned()
        .zip(receivers)
        .map(|(giver, receiver)| Pair { giver, receiver })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RngSource;

    /// Leaves the order untouched, every giver starts out paired with itself.
    struct NoShuffle;

    impl RandomSource for NoShuffle {
        fn shuffle<T>(&mut self, _items: &mut [T]) {}

        fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
            items.first()
        }
    }

    fn sorted<T: Ord + Clone>(items: impl Iterator<Item = T>) -> Vec<T> {
        let mut items: Vec<T> = items.collect();
        items.sort();
        items
    }

    #[test]
    fn test_pair_length() {
        let participants: Vec<u32> = (0..100).collect();
        let pairs = create_pairs(&participants, &mut RngSource::seeded(1));
        assert_eq!(pairs.len(), 100);
    }

    #[test]
    fn test_everyone_gives_and_receives_once() {
        let participants: Vec<u32> = (0..100).collect();
        let pairs = create_pairs(&participants, &mut RngSource::seeded(7));

        let givers: Vec<u32> = pairs.iter().map(|p| p.giver).collect();
        assert_eq!(givers, participants);
        assert_eq!(sorted(pairs.iter().map(|p| p.receiver)), participants);
    }

    #[test]
    fn test_no_self_pair_before_last_slot() {
        for seed in 0..200 {
            let participants: Vec<u32> = (0..25).collect();
            let pairs = create_pairs(&participants, &mut RngSource::seeded(seed));
            let (last, rest) = pairs.split_last().unwrap();

            assert!(rest.iter().all(|p| !p.is_self_pair()), "seed {}", seed);
            if last.is_self_pair() {
                assert_eq!(last.giver, 24);
            }
        }
    }

    #[test]
    fn test_identity_shuffle_leaves_last_slot_colliding() {
        let pairs = create_pairs(&[0, 1, 2], &mut NoShuffle);
        let realized: Vec<(i32, i32)> = pairs.iter().map(|p| (p.giver, p.receiver)).collect();

        assert_eq!(realized, vec![(0, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn test_identity_shuffle_of_two_is_repaired() {
        let pairs = create_pairs(&["a", "b"], &mut NoShuffle);
        let realized: Vec<(&str, &str)> = pairs.iter().map(|p| (p.giver, p.receiver)).collect();

        assert_eq!(realized, vec![("a", "b"), ("b", "a")]);
    }

    #[test]
    fn test_single_participant_draws_themself() {
        let pairs = create_pairs(&["solo"], &mut RngSource::seeded(3));
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].is_self_pair());
    }

    #[test]
    fn test_empty_input_yields_no_pairs() {
        let pairs = create_pairs::<u8, _>(&[], &mut RngSource::seeded(3));
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_same_seed_same_draw() {
        let participants: Vec<u32> = (0..50).collect();
        let first = create_pairs(&participants, &mut RngSource::seeded(2024));
        let second = create_pairs(&participants, &mut RngSource::seeded(2024));
        assert_eq!(first, second);
    }
}
