use std::collections::BTreeMap;

use super::model::PlayerRecord;
use super::side::{TeamSide, SIDE_ORDER};

// ---------------------------------------------------------------------------
// Grouped – the ordered, nested view handed to the renderer
// ---------------------------------------------------------------------------

/// Players of one position, in the order they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGroup<T> {
    pub position: &'static str,
    pub players: Vec<T>,
}

/// One side with its non-empty positions in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct SideGroup<T> {
    pub side: TeamSide,
    pub positions: Vec<PositionGroup<T>>,
}

/// Ordered sequence of sides → positions → players.
///
/// `T` is either a borrowed record ([`GroupedRoster`]) or a record index
/// into [`Roster::records`](super::model::Roster::records)
/// ([`GroupedIndices`]), which the UI state keeps between week changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<T> {
    pub sides: Vec<SideGroup<T>>,
    /// Records that matched the week but have an unclassified position.
    pub hidden: usize,
}

pub type GroupedRoster<'a> = Grouped<&'a PlayerRecord>;
pub type GroupedIndices = Grouped<usize>;

impl<T> Default for Grouped<T> {
    fn default() -> Self {
        Grouped {
            sides: Vec::new(),
            hidden: 0,
        }
    }
}

impl<T> Grouped<T> {
    /// Number of players that will be displayed.
    pub fn player_count(&self) -> usize {
        self.sides
            .iter()
            .flat_map(|s| &s.positions)
            .map(|p| p.players.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }
}

impl<T: Copy> Grouped<T> {
    /// Flatten to `(side, player)` in display order.
    pub fn iter_players(&self) -> impl Iterator<Item = (TeamSide, T)> + '_ {
        self.sides.iter().flat_map(|s| {
            s.positions
                .iter()
                .flat_map(move |p| p.players.iter().map(move |rec| (s.side, *rec)))
        })
    }
}

impl GroupedIndices {
    /// Swap indices for the records they point at. Stale indices are skipped.
    pub fn resolve<'a>(&self, records: &'a [PlayerRecord]) -> GroupedRoster<'a> {
        let mut resolved = Grouped {
            sides: Vec::with_capacity(self.sides.len()),
            hidden: self.hidden,
        };
        for side in &self.sides {
            let positions = side
                .positions
                .iter()
                .map(|p| PositionGroup {
                    position: p.position,
                    players: p.players.iter().filter_map(|&i| records.get(i)).collect(),
                })
                .collect();
            resolved.sides.push(SideGroup {
                side: side.side,
                positions,
            });
        }
        resolved
    }
}

// ---------------------------------------------------------------------------
// Buckets – players keyed by (side, position code)
// ---------------------------------------------------------------------------

/// Players bucketed by side and position code. Bucket contents keep
/// insertion order. Unclassified players live under [`TeamSide::Other`],
/// reachable here but never in [`Buckets::ordered`].
#[derive(Debug, Clone)]
pub struct Buckets<T> {
    by_side: BTreeMap<TeamSide, BTreeMap<String, Vec<T>>>,
}

impl<T> Default for Buckets<T> {
    fn default() -> Self {
        Buckets {
            by_side: BTreeMap::new(),
        }
    }
}

impl<'a> Buckets<&'a PlayerRecord> {
    /// Bucket records by the classification table. A missing position is
    /// treated as the empty code, which is unclassified.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PlayerRecord>,
    {
        Buckets::from_items(
            records
                .into_iter()
                .map(|rec| (rec, rec.position().unwrap_or_default())),
        )
    }
}

impl<T: Clone> Buckets<T> {
    /// Bucket `(player, position code)` pairs.
    pub fn from_items<'p, I>(items: I) -> Self
    where
        I: IntoIterator<Item = (T, &'p str)>,
    {
        let mut by_side: BTreeMap<TeamSide, BTreeMap<String, Vec<T>>> = BTreeMap::new();
        for (item, pos) in items {
            by_side
                .entry(TeamSide::of(pos))
                .or_default()
                .entry(pos.to_string())
                .or_default()
                .push(item);
        }
        Buckets { by_side }
    }

    /// Players in one bucket, if any arrived.
    pub fn get(&self, side: TeamSide, position: &str) -> Option<&[T]> {
        self.by_side
            .get(&side)?
            .get(position)
            .map(Vec::as_slice)
    }

    /// Position codes present for a side, sorted.
    pub fn positions_of(&self, side: TeamSide) -> Vec<&str> {
        self.by_side
            .get(&side)
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn unclassified_count(&self) -> usize {
        self.by_side
            .get(&TeamSide::Other)
            .map(|m| m.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Walk the fixed side order, then each side's position order, keeping
    /// only non-empty buckets. Sides left with no positions are dropped.
    pub fn ordered(&self) -> Grouped<T> {
        let mut sides = Vec::new();
        for side in SIDE_ORDER {
            let Some(buckets) = self.by_side.get(&side) else {
                continue;
            };
            let positions: Vec<PositionGroup<T>> = side
                .positions()
                .iter()
                .filter_map(|&pos| {
                    let players = buckets.get(pos)?;
                    (!players.is_empty()).then(|| PositionGroup {
                        position: pos,
                        players: players.clone(),
                    })
                })
                .collect();
            if !positions.is_empty() {
                sides.push(SideGroup { side, positions });
            }
        }
        Grouped {
            sides,
            hidden: self.unclassified_count(),
        }
    }
}

/// Classify, bucket and order a week's records for display.
pub fn group_and_order<'a, I>(records: I) -> GroupedRoster<'a>
where
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    Buckets::from_records(records).ordered()
}

/// Like [`group_and_order`] over one week of `records`, but keeps record
/// indices so the result can outlive the borrow.
pub fn group_week_indices(records: &[PlayerRecord], week: &str) -> GroupedIndices {
    Buckets::from_items(
        records
            .iter()
            .enumerate()
            .filter(|(_, rec)| rec.week() == Some(week))
            .map(|(i, rec)| (i, rec.position().unwrap_or_default())),
    )
    .ordered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PLAYER_NAME, POSITION, WEEK};

    fn rec(pos: &str, name: &str) -> PlayerRecord {
        [(POSITION, pos), (PLAYER_NAME, name)].into_iter().collect()
    }

    fn names<'a>(group: &PositionGroup<&'a PlayerRecord>) -> Vec<&'a str> {
        group
            .players
            .iter()
            .filter_map(|r| r.player_name())
            .collect()
    }

    #[test]
    fn sides_and_positions_follow_fixed_order() {
        let records = vec![
            rec("LS", "s1"),
            rec("DB", "d1"),
            rec("OL", "o1"),
            rec("QB", "o2"),
            rec("DL", "d2"),
        ];
        let grouped = group_and_order(&records);

        let sides: Vec<TeamSide> = grouped.sides.iter().map(|s| s.side).collect();
        assert_eq!(sides, [TeamSide::Offense, TeamSide::Defense, TeamSide::SpecialTeams]);

        let offense: Vec<&str> = grouped.sides[0].positions.iter().map(|p| p.position).collect();
        assert_eq!(offense, ["QB", "OL"]);
        let defense: Vec<&str> = grouped.sides[1].positions.iter().map(|p| p.position).collect();
        assert_eq!(defense, ["DL", "DB"]);
    }

    #[test]
    fn bucket_keeps_insertion_order() {
        let records = vec![rec("WR", "zed"), rec("QB", "q"), rec("WR", "abe"), rec("WR", "mo")];
        let grouped = group_and_order(&records);
        let wr = &grouped.sides[0].positions[1];
        assert_eq!(wr.position, "WR");
        assert_eq!(names(wr), ["zed", "abe", "mo"]);
    }

    #[test]
    fn empty_sides_are_omitted() {
        let records = vec![rec("K", "kicker")];
        let grouped = group_and_order(&records);
        assert_eq!(grouped.sides.len(), 1);
        assert_eq!(grouped.sides[0].side, TeamSide::SpecialTeams);
    }

    #[test]
    fn unclassified_positions_are_hidden_but_inspectable() {
        let records = vec![rec("XYZ", "x"), rec("QB", "q"), rec("HC", "coach")];
        let buckets = Buckets::from_records(&records);

        assert_eq!(buckets.unclassified_count(), 2);
        assert_eq!(buckets.positions_of(TeamSide::Other), ["HC", "XYZ"]);
        assert_eq!(buckets.get(TeamSide::Other, "XYZ").map(<[_]>::len), Some(1));

        let grouped = buckets.ordered();
        assert_eq!(grouped.player_count(), 1);
        assert_eq!(grouped.hidden, 2);
        assert!(grouped.sides.iter().all(|s| s.side != TeamSide::Other));
    }

    #[test]
    fn missing_position_is_unclassified() {
        let bare: PlayerRecord = [(PLAYER_NAME, "nobody")].into_iter().collect();
        let grouped = group_and_order([&bare]);
        assert!(grouped.is_empty());
        assert_eq!(grouped.hidden, 1);
    }

    #[test]
    fn every_classified_record_lands_in_exactly_one_bucket() {
        let codes = ["QB", "DL", "K", "RB", "??", "LB", "P", "TE", "WR", "DB", "OL", "LS"];
        let records: Vec<PlayerRecord> = codes
            .iter()
            .cycle()
            .take(40)
            .enumerate()
            .map(|(i, c)| rec(c, &format!("p{i}")))
            .collect();
        let grouped = group_and_order(&records);
        let shown: Vec<&PlayerRecord> = grouped.iter_players().map(|(_, r)| r).collect();

        let classified = records
            .iter()
            .filter(|r| TeamSide::of(r.position().unwrap_or_default()) != TeamSide::Other)
            .count();
        assert_eq!(shown.len(), classified);
        assert_eq!(shown.len() + grouped.hidden, records.len());
        for r in &records {
            let hits = shown.iter().filter(|s| std::ptr::eq(**s, r)).count();
            let expected = usize::from(TeamSide::of(r.position().unwrap_or_default()) != TeamSide::Other);
            assert_eq!(hits, expected);
        }
    }

    #[test]
    fn week_indices_match_the_borrowed_grouping() {
        let with_week = |week: &str, pos: &str, name: &str| -> PlayerRecord {
            [(WEEK, week), (POSITION, pos), (PLAYER_NAME, name)].into_iter().collect()
        };
        let records = vec![
            with_week("1", "DL", "d"),
            with_week("1", "QB", "q"),
            with_week("2", "QB", "late"),
            with_week("1", "??", "x"),
            with_week("1", "K", "k"),
        ];

        let indices = group_week_indices(&records, "1");
        let order: Vec<usize> = indices.iter_players().map(|(_, i)| i).collect();
        assert_eq!(order, [1, 0, 4]);
        assert_eq!(indices.hidden, 1);
        assert_eq!(
            indices.resolve(&records),
            group_and_order(records.iter().filter(|r| r.week() == Some("1")))
        );
    }

    #[test]
    fn resolve_skips_indices_past_the_end() {
        let records = vec![rec("QB", "q")];
        let grouped = Grouped {
            sides: vec![SideGroup {
                side: TeamSide::Offense,
                positions: vec![PositionGroup { position: "QB", players: vec![0usize, 7] }],
            }],
            hidden: 0,
        };
        assert_eq!(grouped.resolve(&records).player_count(), 1);
    }

    #[test]
    fn iter_players_tags_each_player_with_its_side() {
        let records = vec![rec("P", "punter"), rec("RB", "back")];
        let grouped = group_and_order(&records);
        let tagged: Vec<(TeamSide, &str)> = grouped
            .iter_players()
            .map(|(side, r)| (side, r.player_name().unwrap_or_default()))
            .collect();
        assert_eq!(
            tagged,
            [(TeamSide::Offense, "back"), (TeamSide::SpecialTeams, "punter")]
        );
    }
}
