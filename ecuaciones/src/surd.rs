use std::fmt;

/// `coeff·√radical` with `radical` squarefree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surd {
    pub coeff: i64,
    pub radical: i64,
}

/// Pulls every square factor out of `n`, so that coeff² · radical = n.
/// Callers only pass non-negative values, zero maps to 0·√0.
///
/// Trial division stops at ∛rest: what is left over then has at most two
/// prime factors, so it is either a perfect square or squarefree.
pub fn simplify_sqrt(n: i64) -> Surd {
    if n <= 0 {
        return Surd {
            coeff: 0,
            radical: 0,
        };
    }
    let (mut coeff, mut radical, mut rest) = (1, 1, n);
    let mut i: i64 = 2;
    while i * i * i <= rest {
        let mut power = 0;
        while rest % i == 0 {
            rest /= i;
            power += 1;
        }
        coeff *= i.pow(power / 2);
        if power % 2 == 1 {
            radical *= i;
        }
        i += 1;
    }
    let root = rest.isqrt();
    if root * root == rest {
        coeff *= root;
    } else {
        radical *= rest;
    }
    Surd { coeff, radical }
}

impl Surd {
    pub fn is_rational(&self) -> bool {
        self.radical <= 1
    }

    pub fn value(&self) -> f64 {
        self.coeff as f64 * (self.radical as f64).sqrt()
    }
}

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.coeff, self.radical) {
            (c, 0) | (c, 1) => write!(f, "{}", c),
            (1, r) => write!(f, "√{}", r),
            (c, r) => write!(f, "{}√{}", c, r),
        }
    }
}
