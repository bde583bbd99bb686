/// One hand per category, strongest last so ranking must reorder them.
pub const EVERY_CATEGORY: &str = "\
5C, 8H, 9H, JS, KS
AC, AS, 5H, 7H, 9C
4H, 4S, 10D, 10S, JC
2H, 2C, 2S, 6H, KC
6D, 7C, 8C, 9D, 10C
5D, 7D, 8D, JD, KD
QD, QC, QS, 4D, 4C
3D, 3C, 3H, 3S, 2D
5S, 6S, 7S, 8S, 9S
10H, JH, QH, KH, AH
";

pub const EVERY_CATEGORY_RANKED: [&str; 10] = [
    "10H JH QH KH AH - Royal Straight Flush",
    "5S 6S 7S 8S 9S - Straight Flush",
    "3D 3C 3H 3S 2D - Four of a Kind",
    "QD QC QS 4D 4C - Full House",
    "5D 7D 8D JD KD - Flush",
    "6D 7C 8C 9D 10C - Straight",
    "2H 2C 2S 6H KC - Three of a Kind",
    "4H 4S 10D 10S JC - Two Pair",
    "AC AS 5H 7H 9C - Pair",
    "5C 8H 9H JS KS - High Card",
];

/// Two pairs of kings; the kicker with the stronger suit wins.
pub const PAIR_TIE: &str = "KD KC 2H 5S 9D\nKH KS 3H 6S 8C\n";
