// 同等な候補の重複除去

use nohash_hasher::BuildNoHashHasher;

use crate::constants::U64Map;
use crate::domain::board::Coord;
use crate::domain::matching::MatchRecord;
use crate::domain::search::Candidate;

const FNV_OFFSET: u64 = 14695981039346656037;
const FNV_PRIME: u64 = 1099511628211;

#[inline(always)]
fn fnv_mix(h: u64, v: u64) -> u64 {
    let mut h = h;
    for b in v.to_le_bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// (起点, マッチ列) の FNV-1a 64bit ハッシュ
pub fn equivalence_hash(origin: Coord, matches: &[MatchRecord]) -> u64 {
    let mut h = FNV_OFFSET;
    h = fnv_mix(h, origin.row as u64);
    h = fnv_mix(h, origin.col as u64);
    h = fnv_mix(h, matches.len() as u64);
    for m in matches {
        h = fnv_mix(h, m.token as u64);
        h = fnv_mix(h, m.size as u64);
    }
    h
}

/// 同じ起点かつ同一のマッチ列（種別・個数・順序）を持つ候補は同等
#[inline]
pub fn equivalent(a: &Candidate, b: &Candidate) -> bool {
    a.origin == b.origin && a.matches == b.matches
}

/// 並び順を保ったまま、各同値類の先頭（＝最高スコア）だけを残す。
/// ハッシュ衝突時もバケット内で厳密比較するので誤って統合しない。
pub fn dedup_candidates(sorted: Vec<Candidate>) -> Vec<Candidate> {
    let mut buckets: U64Map<Vec<usize>> =
        U64Map::with_capacity_and_hasher(sorted.len(), BuildNoHashHasher::default());
    let mut kept: Vec<Candidate> = Vec::with_capacity(sorted.len());

    for cand in sorted {
        let key = equivalence_hash(cand.origin, &cand.matches);
        let bucket = buckets.entry(key).or_default();
        if bucket.iter().any(|&i| equivalent(&kept[i], &cand)) {
            continue;
        }
        bucket.push(kept.len());
        kept.push(cand);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::{Direction, Grid, TokenType};

    fn cand(id: u64, origin: (usize, usize), matches: Vec<MatchRecord>, score: f64) -> Candidate {
        let mut c = Candidate::seed(
            id,
            Grid::filled(1, 1, TokenType::Red),
            Coord::new(origin.0, origin.1),
            matches,
            score,
        );
        c.path = vec![Direction::Right; id as usize];
        c
    }

    #[test]
    fn keeps_first_of_each_class() {
        let m = vec![MatchRecord::new(TokenType::Red, 3)];
        let list = vec![
            cand(1, (0, 0), m.clone(), 2.0),
            cand(2, (0, 0), m.clone(), 2.0),
            cand(3, (0, 1), m.clone(), 1.5),
            cand(4, (0, 0), vec![], 0.0),
        ];
        let out = dedup_candidates(list);
        let ids: Vec<u64> = out.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn match_order_matters() {
        let a = vec![MatchRecord::new(TokenType::Red, 3), MatchRecord::new(TokenType::Blue, 3)];
        let b = vec![MatchRecord::new(TokenType::Blue, 3), MatchRecord::new(TokenType::Red, 3)];
        let out = dedup_candidates(vec![cand(1, (0, 0), a, 1.0), cand(2, (0, 0), b, 1.0)]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn hash_is_stable_and_order_sensitive() {
        let m = [MatchRecord::new(TokenType::Red, 3), MatchRecord::new(TokenType::Blue, 4)];
        let h1 = equivalence_hash(Coord::new(1, 2), &m);
        let h2 = equivalence_hash(Coord::new(1, 2), &m);
        assert_eq!(h1, h2);
        assert_ne!(h1, equivalence_hash(Coord::new(2, 1), &m));
        let rev = [m[1], m[0]];
        assert_ne!(h1, equivalence_hash(Coord::new(1, 2), &rev));
    }
}
