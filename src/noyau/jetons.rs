// src/noyau/jetons.rs

/// Opérateurs binaires reconnus (pas de parenthèses, pas de puissance).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Operateur {
    /// Caractère ASCII -> opérateur.
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Div => '/',
        }
    }

    /// Glyphe d’affichage (× ÷ − +).
    pub fn glyphe(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '−',
            Self::Fois => '×',
            Self::Div => '÷',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Div => 2,
        }
    }
}

/// Vrai si `c` est un des quatre opérateurs ASCII.
pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Littéral tel qu’écrit (signe unaire compris) ; parsé à l’évaluation.
    Num(String),
    Op(Operateur),
}

/// Tokenize une chaîne en jetons.
///
/// - chiffres et '.' s’accumulent dans un nombre
/// - '-' est un signe (collé au nombre) s’il ouvre la chaîne ou suit un
///   opérateur, ET si le caractère suivant est un chiffre ou '.'
/// - tout autre caractère est ignoré (l’entrée est déjà normalisée en amont)
pub fn tokenize(s: &str) -> Vec<Tok> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut nombre = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        let Some(op) = Operateur::depuis_char(c) else {
            continue;
        };

        if op == Operateur::Moins {
            let apres_op = i == 0 || est_operateur(chars[i - 1]);
            let suivi_nombre = chars
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == '.');
            if apres_op && suivi_nombre {
                nombre.push(c);
                continue;
            }
        }

        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }
        out.push(Tok::Op(op));
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    out
}

/// Format utilitaire (journal / tests) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(lit) => lit.clone(),
            Tok::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
