use serde::Serialize;

/// A fixed fat-loss mass with a display label, used for the unlock gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub label: &'static str,
    pub threshold_grams: u32,
    pub icon: &'static str,
    pub description: &'static str,
}

const fn milestone(
    label: &'static str,
    threshold_grams: u32,
    icon: &'static str,
    description: &'static str,
) -> Milestone {
    Milestone {
        label,
        threshold_grams,
        icon,
        description,
    }
}

/// Ordered by strictly increasing `threshold_grams`.
pub static MILESTONES: [Milestone; 11] = [
    milestone("バター1箱", 200, "🧈", "料理にコクを出すカロリーの塊"),
    milestone("サッカーボール", 450, "⚽", "意外と軽い？450g級の脂肪"),
    milestone("週刊少年ジャンプ", 700, "📕", "持ち歩くと重いあの厚み"),
    milestone("水 1リットル", 1000, "💧", "ついにキログラムの大台へ"),
    milestone("ノートPC", 1500, "💻", "常に持ち運んでいた脂肪PC"),
    milestone("２リットル瓶", 2000, "🍾", "パーティサイズの重さ"),
    milestone("新生児", 3000, "👶", "命の重さを脂肪で感じる"),
    milestone("猫", 4000, "🐈", "脂肪という名のペットを手放した"),
    milestone("米袋 (5kg)", 5000, "🌾", "スーパーで買うと重いアレ"),
    milestone("ロードバイク", 8000, "🚴", "高級自転車1台分の軽量化"),
    milestone("一斗缶", 15000, "🛢️", "とんでもない量を燃やしました"),
];

impl Milestone {
    pub fn is_unlocked(&self, fat_loss_grams: f64) -> bool {
        fat_loss_grams >= f64::from(self.threshold_grams)
    }
}

/// Number of milestones whose threshold is ≤ `grams`.
fn unlocked_count(table: &[Milestone], grams: f64) -> usize {
    table.partition_point(|m| m.is_unlocked(grams))
}

/// Highest milestone with `threshold_grams <= grams`.
pub fn current_milestone(table: &[Milestone], grams: f64) -> Option<Milestone> {
    unlocked_count(table, grams)
        .checked_sub(1)
        .map(|idx| table[idx])
}

/// Lowest milestone with `threshold_grams > grams`.
pub fn next_milestone(table: &[Milestone], grams: f64) -> Option<Milestone> {
    table.get(unlocked_count(table, grams)).copied()
}

/// Gallery row: a milestone with its unlock flag.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MilestoneStatus {
    pub milestone: Milestone,
    pub unlocked: bool,
}

pub fn gallery(table: &[Milestone], grams: f64) -> Vec<MilestoneStatus> {
    table
        .iter()
        .map(|m| MilestoneStatus {
            milestone: *m,
            unlocked: m.is_unlocked(grams),
        })
        .collect()
}
