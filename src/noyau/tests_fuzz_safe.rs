//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur / profondeur bornées
//! - budget temps global
//! - invariant clé : soit un nombre fini et borné, soit une erreur CLASSÉE

use std::time::{Duration, Instant};

use super::eval::{evaluer, MAGNITUDE_MAX};
use super::evaluate;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const KINDS_CONNUS: &[&str] = &[
    "ParseError",
    "UnsupportedExpression",
    "DivisionByZero",
    "NonNumericResult",
    "NonFiniteResult",
    "MagnitudeOverflow",
    "TooComplex",
];

fn check_valeur(entree: &str, v: f64) {
    assert!(v.is_finite(), "valeur non finie pour {entree:?}: {v}");
    assert!(v.abs() <= MAGNITUDE_MAX, "magnitude hors plafond pour {entree:?}: {v}");
}

/// Issue observable d’une évaluation (pour comparer deux passes).
fn issue(entree: &str) -> Result<u64, &'static str> {
    match evaluate(entree) {
        Ok(r) => {
            check_valeur(entree, r.valeur);
            Ok(r.valeur.to_bits())
        }
        Err(e) => {
            assert!(
                KINDS_CONNUS.contains(&e.kind()),
                "erreur non classée: entree={entree:?} kind={}",
                e.kind()
            );
            Err(e.kind())
        }
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Fragments qui visent les phrases / mots-opérateurs.
const FRAGMENTS: &[&str] = &[
    "add ", "and ", "subtract ", "from ", "multiply ", "by ", "divide ", "percent of ",
    "square root of ", "plus ", "minus ", "times ", "x ", "over ", "two ", "hundred ",
    "twenty-one ", "thousand ", "seven ", "import ", "os", "__", "lambda ", "eval(", "'",
];

fn gen_ascii(rng: &mut Rng, max_len: u32) -> String {
    let n = rng.pick(max_len) + 1;
    let mut s = String::new();
    for _ in 0..n {
        if rng.pick(4) == 0 {
            s.push_str(FRAGMENTS[rng.pick(FRAGMENTS.len() as u32) as usize]);
        } else {
            // ASCII imprimable 0x20..=0x7e
            let c = char::from(0x20u8 + rng.pick(95) as u8);
            s.push(c);
        }
    }
    s
}

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(10)),
        3 => format!(".{}", rng.pick(10)),
        4 => format!("{}", rng.pick(5000)),
        _ => "2".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(9) {
        0 => gen_nombre(rng),
        1 => format!("({a}+{b})"),
        2 => format!("({a}-{b})"),
        3 => format!("({a}*{b})"),
        4 => format!("({a}/{b})"),
        5 => format!("({a}%{b})"),
        6 => format!("({a}//{b})"),
        7 => format!("({a}^{b})"),
        _ => {
            if rng.coin() {
                format!("-{a}")
            } else {
                format!("+({a})")
            }
        }
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_ascii_aleatoire_classe_ou_nombre() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let entree = gen_ascii(&mut rng, 12);
        match issue(&entree) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // Du bruit ASCII : surtout des erreurs, mais le filtre en sauve quelques-uns
    assert!(seen_err > 100, "trop peu d’erreurs: {seen_err}");
    assert!(seen_ok > 0, "aucun succès: fuzz trop “sale”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..60 {
        let a = gen_ascii(&mut r1, 30);
        let b = gen_ascii(&mut r2, 30);
        assert_eq!(a, b);
        // Même entrée => même issue (valeur au bit près ou même kind)
        assert_eq!(issue(&a), issue(&b), "entree={a:?}");
    }
}

#[test]
fn fuzz_safe_expressions_arithmetiques() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match evaluer(&super::filtre::filtrer(&expr)) {
            Ok(v) => {
                check_valeur(&expr, v);
                seen_ok += 1;
            }
            Err(e) => {
                // grammaire toujours bien formée ici : pas d’erreur de syntaxe
                assert_ne!(e.kind(), "ParseError", "expr={expr:?} err={e}");
                assert_ne!(e.kind(), "UnsupportedExpression", "expr={expr:?} err={e}");
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_injections_jamais_evaluees_comme_code() {
    for s in [
        "__import__('os').system('ls')",
        "import os",
        "exec(\"print(1)\")",
        "lambda: 0",
        "[1, 2][0]",
        "{'a': 1}",
        "1 if True else 2",
        "a = 5",
        "2 < 3",
        "not 0",
        "open('/etc/passwd').read()",
    ] {
        match evaluate(s) {
            // un nombre éventuel ne vient QUE des chiffres laissés par le filtre
            Ok(r) => {
                assert!(
                    r.filtree.chars().all(|c| !c.is_alphabetic() && !"'\"[]{}_=<>:".contains(c)),
                    "s={s:?} filtree={:?}",
                    r.filtree
                );
                assert_eq!(evaluer(&r.filtree), Ok(r.valeur), "s={s:?}");
            }
            Err(e) => assert!(KINDS_CONNUS.contains(&e.kind()), "s={s:?}"),
        }
    }
    assert!(evaluate("import os").is_err());
    assert!(evaluate("__import__('os').system('ls')").is_err());
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    let expr = somme_balancee("1/2", 800);
    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_imbrication_profonde_bornee() {
    for n in [65usize, 150, 1000] {
        let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        let e = evaluer(&expr).unwrap_err();
        assert_eq!(e.kind(), "TooComplex", "n={n}");
    }
}
