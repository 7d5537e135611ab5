use crate::model::ShiftKind;

/// Compteurs cumulés d'une personne sur la génération en cours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonTally {
    pub total: u32,
    pub wfh: u32,
}

/// État mutable d'une génération, indexé par position dans la liste de personnes.
#[derive(Debug)]
pub(super) struct RunState {
    tallies: Vec<PersonTally>,
    used_today: Vec<bool>,
}

impl RunState {
    pub(super) fn new(people: usize) -> Self {
        Self {
            tallies: vec![PersonTally::default(); people],
            used_today: vec![false; people],
        }
    }

    /// Remet à zéro l'ensemble des personnes déjà placées dans la journée.
    pub(super) fn start_day(&mut self) {
        self.used_today.fill(false);
    }

    pub(super) fn is_used_today(&self, idx: usize) -> bool {
        self.used_today[idx]
    }

    pub(super) fn tally(&self, idx: usize) -> PersonTally {
        self.tallies[idx]
    }

    pub(super) fn len(&self) -> usize {
        self.tallies.len()
    }

    pub(super) fn record(&mut self, idx: usize, kind: ShiftKind) {
        self.used_today[idx] = true;
        let tally = &mut self.tallies[idx];
        tally.total += 1;
        if kind.is_wfh() {
            tally.wfh += 1;
        }
    }
}
