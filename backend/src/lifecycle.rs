//! Machine à états vu/capturé du Pokédex.
//!
//! Deux politiques de transition coexistent selon la révision de
//! l'interface: les bascules indépendantes (deux boutons par carte) et le
//! cycle (un seul geste qui avance). Les deux sont des fonctions pures:
//! la persistance du résultat reste à la charge de l'appelant.

/// Statut d'un Pokémon dans le Pokédex.
///
/// La paire (vu=false, capturé=true) n'est pas représentable ici:
/// un Pokémon capturé est forcément vu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Unseen,
    Seen,
    Caught,
}

impl Status {
    /// Interprète la paire de booléens stockée en base. `caught` prime:
    /// une ligne corrompue (vu=false, capturé=true) est lue comme capturée.
    pub fn from_flags(seen: bool, caught: bool) -> Self {
        if caught {
            Status::Caught
        } else if seen {
            Status::Seen
        } else {
            Status::Unseen
        }
    }

    pub fn seen(self) -> bool {
        !matches!(self, Status::Unseen)
    }

    pub fn caught(self) -> bool {
        matches!(self, Status::Caught)
    }

    /// Paire (vu, capturé) à persister.
    pub fn flags(self) -> (bool, bool) {
        (self.seen(), self.caught())
    }
}

/// Transition demandée par l'utilisateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    ToggleSeen,
    ToggleCaught,
    Advance,
}

/// Politique de transition, sélectionnée par l'appelant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Deux bascules séparées; capturer force "vu".
    IndependentToggle,
    /// Un seul geste: Unseen → Seen → Caught → Unseen.
    Cyclic,
}

impl Policy {
    /// Calcule le prochain statut. Totale: une transition que la
    /// politique n'expose pas laisse le statut inchangé.
    pub fn apply(self, current: Status, transition: Transition) -> Status {
        match (self, transition) {
            (Policy::IndependentToggle, Transition::ToggleSeen) => match current {
                Status::Unseen => Status::Seen,
                // Décocher "vu" sur un Pokémon capturé relâche aussi la
                // capture, sinon la paire invalide (vu=false, capturé=true)
                // serait produite.
                Status::Seen | Status::Caught => Status::Unseen,
            },
            (Policy::IndependentToggle, Transition::ToggleCaught) => match current {
                Status::Unseen | Status::Seen => Status::Caught,
                Status::Caught => Status::Seen,
            },
            (Policy::Cyclic, Transition::Advance) => match current {
                Status::Unseen => Status::Seen,
                Status::Seen => Status::Caught,
                Status::Caught => Status::Unseen,
            },
            _ => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOUS_LES_STATUTS: [Status; 3] = [Status::Unseen, Status::Seen, Status::Caught];

    #[test]
    fn lecture_des_drapeaux_stockes() {
        assert_eq!(Status::from_flags(false, false), Status::Unseen);
        assert_eq!(Status::from_flags(true, false), Status::Seen);
        assert_eq!(Status::from_flags(true, true), Status::Caught);
        // Paire invalide en base: capturé prime.
        assert_eq!(Status::from_flags(false, true), Status::Caught);
    }

    #[test]
    fn projection_vers_les_drapeaux() {
        assert_eq!(Status::Unseen.flags(), (false, false));
        assert_eq!(Status::Seen.flags(), (true, false));
        assert_eq!(Status::Caught.flags(), (true, true));
    }

    #[test]
    fn le_cycle_a_une_periode_de_trois() {
        let mut statut = Status::Unseen;
        let attendu = [Status::Seen, Status::Caught, Status::Unseen];
        for etape in attendu {
            statut = Policy::Cyclic.apply(statut, Transition::Advance);
            assert_eq!(statut, etape);
        }
        // De retour au point de départ après trois pas.
        assert_eq!(statut, Status::Unseen);
    }

    #[test]
    fn avancer_ne_laisse_jamais_sur_place() {
        for statut in TOUS_LES_STATUTS {
            assert_ne!(Policy::Cyclic.apply(statut, Transition::Advance), statut);
        }
    }

    #[test]
    fn avancer_sur_les_drapeaux_de_l_exemple() {
        let depart = Status::from_flags(false, false);
        let un = Policy::Cyclic.apply(depart, Transition::Advance);
        assert_eq!(un.flags(), (true, false));
        let deux = Policy::Cyclic.apply(un, Transition::Advance);
        assert_eq!(deux.flags(), (true, true));
        let trois = Policy::Cyclic.apply(deux, Transition::Advance);
        assert_eq!(trois.flags(), (false, false));
    }

    #[test]
    fn capturer_force_toujours_vu() {
        for statut in [Status::Unseen, Status::Seen] {
            let suivant = Policy::IndependentToggle.apply(statut, Transition::ToggleCaught);
            assert_eq!(suivant, Status::Caught);
            assert!(suivant.seen());
        }
    }

    #[test]
    fn relacher_preserve_vu() {
        let suivant = Policy::IndependentToggle.apply(Status::Caught, Transition::ToggleCaught);
        assert_eq!(suivant, Status::Seen);
        assert!(suivant.seen());
        assert!(!suivant.caught());
    }

    #[test]
    fn basculer_vu_fait_l_aller_retour() {
        let vu = Policy::IndependentToggle.apply(Status::Unseen, Transition::ToggleSeen);
        assert_eq!(vu, Status::Seen);
        let non_vu = Policy::IndependentToggle.apply(vu, Transition::ToggleSeen);
        assert_eq!(non_vu, Status::Unseen);
    }

    #[test]
    fn decocher_vu_relache_aussi_la_capture() {
        let suivant = Policy::IndependentToggle.apply(Status::Caught, Transition::ToggleSeen);
        assert_eq!(suivant, Status::Unseen);
    }

    #[test]
    fn la_paire_invalide_est_inatteignable() {
        for statut in TOUS_LES_STATUTS {
            for politique in [Policy::IndependentToggle, Policy::Cyclic] {
                for transition in [
                    Transition::ToggleSeen,
                    Transition::ToggleCaught,
                    Transition::Advance,
                ] {
                    let (seen, caught) = politique.apply(statut, transition).flags();
                    assert!(seen || !caught, "paire invalide produite");
                }
            }
        }
    }

    #[test]
    fn transition_hors_politique_sans_effet() {
        for statut in TOUS_LES_STATUTS {
            assert_eq!(
                Policy::Cyclic.apply(statut, Transition::ToggleSeen),
                statut
            );
            assert_eq!(
                Policy::Cyclic.apply(statut, Transition::ToggleCaught),
                statut
            );
            assert_eq!(
                Policy::IndependentToggle.apply(statut, Transition::Advance),
                statut
            );
        }
    }
}
