use crate::parser::Postfix;
use rand::Rng;
use std::fmt;

/// Sorted digit multisets that cannot be combined into 10.
pub const IMPOSSIBLE: [&str; 48] = [
    "1111", "1112", "1113", "1122", "1159", "1169", "1177", "1178", "1179", "1188",
    "1399", "1444", "1499", "1666", "1667", "1677", "1699", "1777", "2257", "3444",
    "3669", "3779", "3999", "4444", "4459", "4477", "4558", "4899", "4999", "5668",
    "5788", "5799", "5899", "6666", "6667", "6677", "6777", "6778", "6888", "6899",
    "6999", "7777", "7788", "7789", "7799", "7888", "7999", "8899",
];

pub fn is_impossible(digits: &[u8]) -> bool {
    if digits.len() != 4 {
        return false;
    }
    let mut sorted = digits.to_vec();
    sorted.sort_unstable();
    let key: String = sorted.iter().map(|d| d.to_string()).collect();
    IMPOSSIBLE.binary_search(&key.as_str()).is_ok()
}

/// The four digits a player has to make 10 with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Hand(pub [u8; 4]);

impl Hand {
    pub fn is_impossible(&self) -> bool {
        is_impossible(&self.0)
    }

    /// True if `rpn` spends exactly this hand's digits, in any order.
    pub fn uses(&self, rpn: &Postfix) -> bool {
        let mut used: Vec<u8> = rpn.digits().collect();
        let mut dealt = self.0.to_vec();
        used.sort_unstable();
        dealt.sort_unstable();
        used == dealt
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{} {} {} {}", a, b, c, d)
    }
}

pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let mut digits = [0u8; 4];
    for d in digits.iter_mut() {
        *d = rng.random_range(1..=9);
    }
    Hand(digits)
}

/// Redeal until the hand has at least one way to make 10.
pub fn deal_playable<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    loop {
        let hand = deal(rng);
        if !hand.is_impossible() {
            return hand;
        }
        debug!("deal: redealing impossible hand {}", hand);
    }
}
