use super::SeaOrmStorage;
use super::lookups::{fetch_page, reward_punishment_details, student_ids_matching};
use super::student_status::ensure_student_exists;
use crate::entity::reward_punishments::{ActiveModel, Column, Entity as RewardPunishments};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    reward_punishments::{
        entities::{RecordKind, RewardPunishment, RewardPunishmentDetail},
        requests::{
            CreateRewardPunishmentRequest, RewardPunishmentListParams,
            UpdateRewardPunishmentRequest,
        },
        responses::{CategoryCount, RewardPunishmentListResponse, RewardPunishmentStatistics},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

fn require_category(category: &str) -> Result<String> {
    let category = category.trim();
    if category.is_empty() || category.chars().count() > 50 {
        return Err(SchoolSystemError::validation("类别长度必须在 1 到 50 个字符之间"));
    }
    Ok(category.to_string())
}

/// 按 (类型, 类别) 计数汇总
fn summarize(rows: Vec<(String, String, i64)>) -> RewardPunishmentStatistics {
    let mut stats = RewardPunishmentStatistics {
        total: 0,
        rewards: 0,
        punishments: 0,
        by_category: Vec::with_capacity(rows.len()),
    };
    for (kind, category, count) in rows {
        stats.total += count;
        if kind == RecordKind::Reward.as_str() {
            stats.rewards += count;
        } else if kind == RecordKind::Punishment.as_str() {
            stats.punishments += count;
        }
        stats.by_category.push(CategoryCount {
            kind,
            category,
            count,
        });
    }
    stats
}

impl SeaOrmStorage {
    pub async fn create_reward_punishment_impl(
        &self,
        req: CreateRewardPunishmentRequest,
        handler_id: i64,
    ) -> Result<RewardPunishment> {
        let category = require_category(&req.category)?;
        ensure_student_exists(&self.db, req.student_id).await?;

        let record = ActiveModel {
            student_id: Set(req.student_id),
            kind: Set(req.kind.to_string()),
            category: Set(category),
            description: Set(req.description.filter(|d| !d.trim().is_empty())),
            occur_date: Set(req.occur_date),
            handler_id: Set(Some(handler_id)),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(record.into_record())
    }

    pub async fn get_reward_punishment_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<RewardPunishmentDetail>> {
        let Some(record) = RewardPunishments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询奖惩记录失败: {e}")))?
        else {
            return Ok(None);
        };
        Ok(reward_punishment_details(&self.db, vec![record]).await?.pop())
    }

    pub async fn list_reward_punishments_with_pagination_impl(
        &self,
        query: RewardPunishmentListParams,
    ) -> Result<RewardPunishmentListResponse> {
        let mut select = RewardPunishments::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(ref kind) = query.kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }
        if let Some(ref category) = query.category
            && !category.trim().is_empty()
        {
            select = select.filter(Column::Category.eq(category.trim()));
        }
        if let Some(start) = query.start_date {
            select = select.filter(Column::OccurDate.gte(start));
        }
        if let Some(end) = query.end_date {
            select = select.filter(Column::OccurDate.lte(end));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let ids = student_ids_matching(&self.db, search.trim()).await?;
            select = select.filter(Column::StudentId.is_in(ids));
        }

        let select = select
            .order_by_desc(Column::OccurDate)
            .order_by_desc(Column::Id);
        let (rows, pagination) = fetch_page(&self.db, select, &query.pagination).await?;
        Ok(PaginatedResponse {
            items: reward_punishment_details(&self.db, rows).await?,
            pagination,
        })
    }

    pub async fn update_reward_punishment_impl(
        &self,
        id: i64,
        update: UpdateRewardPunishmentRequest,
    ) -> Result<Option<RewardPunishment>> {
        let Some(existing) = RewardPunishments::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(kind) = update.kind {
            model.kind = Set(kind.to_string());
        }
        if let Some(category) = update.category {
            model.category = Set(require_category(&category)?);
        }
        if let Some(description) = update.description {
            let description = description.trim().to_string();
            model.description = Set((!description.is_empty()).then_some(description));
        }
        if let Some(occur_date) = update.occur_date {
            model.occur_date = Set(occur_date);
        }

        let record = model.update(&self.db).await?;
        Ok(Some(record.into_record()))
    }

    pub async fn delete_reward_punishment_impl(&self, id: i64) -> Result<bool> {
        let result = RewardPunishments::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn list_student_reward_punishments_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<RewardPunishment>> {
        ensure_student_exists(&self.db, student_id).await?;
        let records = RewardPunishments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::OccurDate)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;
        Ok(records.into_iter().map(|r| r.into_record()).collect())
    }

    pub async fn reward_punishment_statistics_impl(
        &self,
        student_id: Option<i64>,
    ) -> Result<RewardPunishmentStatistics> {
        let mut select = RewardPunishments::find()
            .select_only()
            .column(Column::Kind)
            .column(Column::Category)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Kind)
            .group_by(Column::Category)
            .order_by_asc(Column::Kind)
            .order_by_asc(Column::Category);
        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let rows: Vec<(String, String, i64)> = select
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计奖惩记录失败: {e}")))?;
        Ok(summarize(rows))
    }

    pub async fn list_reward_punishment_categories_impl(&self) -> Result<Vec<String>> {
        let categories: Vec<String> = RewardPunishments::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::Category.ne(""))
            .order_by_asc(Column::Category)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(categories
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let stats = summarize(vec![
            ("punishment".into(), "警告".into(), 1),
            ("reward".into(), "三好学生".into(), 2),
            ("reward".into(), "奖学金".into(), 3),
        ]);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.rewards, 5);
        assert_eq!(stats.punishments, 1);
        assert_eq!(stats.by_category.len(), 3);
    }

    #[test]
    fn test_require_category() {
        assert!(require_category("   ").is_err());
        assert_eq!(require_category(" 奖学金 ").unwrap(), "奖学金");
    }
}
