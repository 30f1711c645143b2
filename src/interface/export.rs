use std::path::Path;

use crate::error::Result;
use crate::models::WeeklyPlanRow;

/// Write a weekly plan to CSV with the same column names as the JSON output.
pub fn write_plan_csv(plan: &[WeeklyPlanRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for row in plan {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn row(day: &str, total: u32) -> WeeklyPlanRow {
        WeeklyPlanRow {
            day: day.to_string(),
            breakfast: "Idli with Sambar (300 cal)".to_string(),
            lunch: "Millet Khichdi with Vegetables (520 cal)".to_string(),
            snack: "Fresh Fruit (Seasonal) (120 cal)".to_string(),
            dinner: "Masoor Dal with Millet Rotis (420 cal)".to_string(),
            total_calories: total,
        }
    }

    #[test]
    fn test_write_plan_csv() {
        let file = NamedTempFile::new().unwrap();
        write_plan_csv(&[row("Sunday", 1360), row("Monday", 1360)], file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("Day,Breakfast,Lunch,Snack,Dinner,Total Calories")
        );
        assert_eq!(
            lines.next(),
            Some("Sunday,Idli with Sambar (300 cal),Millet Khichdi with Vegetables (520 cal),Fresh Fruit (Seasonal) (120 cal),Masoor Dal with Millet Rotis (420 cal),1360")
        );
        assert_eq!(lines.count(), 1);
    }
}
