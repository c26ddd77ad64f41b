//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la session avec des suites de touches sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche :
//!   alphabet du tampon, un seul '.' par segment, opérateurs jamais collés
//!   (hors signe), historique borné,
//!   "=" réussi => tampon == résultat en tête d’historique

use std::time::{Duration, Instant};

use super::historique::HISTORIQUE_DEFAUT;
use super::jetons::est_operateur;
use super::session::Session;
use super::tampon::{operateurs_bien_places, Commande};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches aléatoires ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Touche {
    Car(char),
    Cmd(Commande),
}

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres majoritaires, sinon on ne forme jamais de nombres
    match rng.pick(20) {
        0..=9 => Touche::Car(char::from(b'0' + rng.pick(10) as u8)),
        10 => Touche::Car('.'),
        11 => Touche::Car('+'),
        12 => Touche::Car('-'),
        13 => Touche::Car('*'),
        14 => Touche::Car('/'),
        15 => Touche::Cmd(Commande::Supprimer),
        16 => Touche::Cmd(Commande::Pourcent),
        17 => Touche::Cmd(Commande::Signe),
        18 => Touche::Cmd(Commande::Egal),
        _ => {
            if rng.pick(4) == 0 {
                Touche::Cmd(Commande::Effacer)
            } else {
                Touche::Car('0')
            }
        }
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(s: &Session, derniere: Touche, commit: bool) {
    let t = s.buffer();

    assert!(
        t.chars().all(|c| c.is_ascii_digit() || c == '.' || est_operateur(c)),
        "caractère hors alphabet: {t:?} (après {derniere:?})"
    );

    for seg in t.split(est_operateur) {
        assert!(
            seg.matches('.').count() <= 1,
            "deux points dans un segment: {t:?} (après {derniere:?})"
        );
    }

    assert!(
        operateurs_bien_places(t),
        "opérateurs collés: {t:?} (après {derniere:?})"
    );

    assert!(s.history().len() <= HISTORIQUE_DEFAUT);

    if commit {
        assert_eq!(s.history()[0].resultat, t, "commit sans écho du résultat");
        assert_ne!(t, "Error");
    }

    // lectures totales : jamais vides
    assert!(!s.display_expression().is_empty());
    assert!(!s.preview_result().is_empty());
}

fn rejouer(seed: u64, n: usize, t0: Instant, max: Duration) -> (Session, usize) {
    let mut rng = Rng::new(seed);
    let mut s = Session::default();
    let mut commits = 0usize;

    for _ in 0..n {
        budget(t0, max);

        let touche = gen_touche(&mut rng);
        let commit = match touche {
            Touche::Car(c) => {
                s.on_input_char(c);
                false
            }
            Touche::Cmd(cmd) => s.on_command(cmd),
        };
        if commit {
            commits += 1;
        }
        check_invariants(&s, touche, commit);
    }

    (s, commits)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_session() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let (s, commits) = rejouer(0xC0FFEE_u64, 2000, t0, max);

    // On veut voir des “=” aboutir, sinon le fuzz ne “balaye” rien.
    assert!(commits > 20, "trop peu de commits: {commits}");
    assert_eq!(s.history().len(), HISTORIQUE_DEFAUT);
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // Même seed => mêmes touches => même état final
    let (a, ca) = rejouer(0xBADC0DE_u64, 1000, t0, max);
    let (b, cb) = rejouer(0xBADC0DE_u64, 1000, t0, max);

    assert_eq!(ca, cb);
    assert_eq!(a.buffer(), b.buffer());
    assert_eq!(a.history(), b.history());
}

#[test]
fn fuzz_safe_signe_supprimer_operateur() {
    // "5+3", ±, DEL, × : le signe pendant part avec l’opérateur
    let mut s = Session::default();
    let touches = [
        Touche::Car('5'),
        Touche::Car('+'),
        Touche::Car('3'),
        Touche::Cmd(Commande::Signe),
        Touche::Cmd(Commande::Supprimer),
        Touche::Car('*'),
        Touche::Car('2'),
        Touche::Cmd(Commande::Egal),
    ];
    for touche in touches {
        let commit = match touche {
            Touche::Car(c) => {
                s.on_input_char(c);
                false
            }
            Touche::Cmd(cmd) => s.on_command(cmd),
        };
        check_invariants(&s, touche, commit);
    }
    assert_eq!(s.buffer(), "10");
    assert_eq!(s.history()[0].expression, "5*2");
}

#[test]
fn fuzz_safe_longue_chaine_sans_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 1+1+1+... (2000 termes) : la pile d’opérateurs reste plate
    let mut s = Session::default();
    s.on_input_char('1');
    for _ in 1..2000 {
        s.on_input_char('+');
        s.on_input_char('1');
    }
    budget(t0, max);

    assert_eq!(s.preview_result(), "2000");
    assert!(s.on_command(Commande::Egal));
    assert_eq!(s.buffer(), "2000");
}
