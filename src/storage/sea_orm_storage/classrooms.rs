use std::collections::HashSet;

use super::SeaOrmStorage;
use super::lookups::{fetch_page, offering_ids_for_semester};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms};
use crate::entity::schedules;
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    classrooms::{
        entities::{Classroom, ClassroomStatus},
        requests::{ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
};
use crate::utils::sql::contains_escaped;
use crate::utils::timetable::TimeSlot;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

fn equipment_json(equipment: &[String]) -> Result<String> {
    serde_json::to_string(equipment)
        .map_err(|e| SchoolSystemError::serialization(format!("设备列表序列化失败: {e}")))
}

impl SeaOrmStorage {
    pub async fn create_classroom_impl(&self, req: CreateClassroomRequest) -> Result<Classroom> {
        let now = chrono::Utc::now().timestamp();
        let classroom = ActiveModel {
            room_no: Set(req.room_no),
            building: Set(req.building),
            floor: Set(req.floor),
            capacity: Set(req.capacity),
            room_type: Set(req.room_type.to_string()),
            equipment: Set(equipment_json(&req.equipment)?),
            status: Set(req
                .status
                .unwrap_or(ClassroomStatus::Available)
                .to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(classroom.into_classroom())
    }

    pub async fn get_classroom_by_id_impl(&self, id: i64) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教室失败: {e}")))?;
        Ok(result.map(|m| m.into_classroom()))
    }

    pub async fn list_classrooms_with_pagination_impl(
        &self,
        query: ClassroomListParams,
    ) -> Result<ClassroomListResponse> {
        let mut select = Classrooms::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(contains_escaped(Column::RoomNo, search));
        }
        if let Some(ref building) = query.building
            && !building.trim().is_empty()
        {
            select = select.filter(Column::Building.eq(building.trim()));
        }
        if let Some(room_type) = query.room_type {
            select = select.filter(Column::RoomType.eq(room_type.to_string()));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }
        if let Some(min) = query.min_capacity {
            select = select.filter(Column::Capacity.gte(min));
        }

        let select = select
            .order_by_asc(Column::Building)
            .order_by_asc(Column::RoomNo);
        let (rooms, pagination) = fetch_page(&self.db, select, &query.pagination).await?;
        Ok(PaginatedResponse {
            items: rooms.into_iter().map(|r| r.into_classroom()).collect(),
            pagination,
        })
    }

    pub async fn list_all_classrooms_impl(&self) -> Result<Vec<Classroom>> {
        let rooms = Classrooms::find()
            .order_by_asc(Column::Building)
            .order_by_asc(Column::RoomNo)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教室列表失败: {e}")))?;
        Ok(rooms.into_iter().map(|r| r.into_classroom()).collect())
    }

    /// 时段内空闲的可用教室：排除停用/维护中以及已被占用的教室
    pub async fn list_available_classrooms_impl(
        &self,
        slot: TimeSlot,
        semester: Option<String>,
        min_capacity: Option<i64>,
        room_type: Option<String>,
    ) -> Result<Vec<Classroom>> {
        let mut booked = schedules::Entity::find()
            .filter(schedules::Column::DayOfWeek.eq(slot.day_of_week));
        if let Some(ids) = offering_ids_for_semester(&self.db, semester.as_deref()).await? {
            booked = booked.filter(schedules::Column::OfferingId.is_in(ids));
        }
        let occupied: HashSet<i64> = booked
            .all(&self.db)
            .await?
            .into_iter()
            .filter(|s| slot.conflicts_with_stored(s.day_of_week, &s.start_time, &s.end_time, &s.weeks))
            .map(|s| s.classroom_id)
            .collect();

        let mut select =
            Classrooms::find().filter(Column::Status.eq(ClassroomStatus::Available.to_string()));
        if let Some(min) = min_capacity {
            select = select.filter(Column::Capacity.gte(min));
        }
        if let Some(room_type) = room_type {
            select = select.filter(Column::RoomType.eq(room_type));
        }

        let rooms = select
            .order_by_asc(Column::Capacity)
            .order_by_asc(Column::RoomNo)
            .all(&self.db)
            .await?;
        Ok(rooms
            .into_iter()
            .filter(|r| !occupied.contains(&r.id))
            .map(|r| r.into_classroom())
            .collect())
    }

    pub async fn update_classroom_impl(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        let Some(existing) = Classrooms::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(room_no) = update.room_no {
            model.room_no = Set(room_no);
        }
        if let Some(building) = update.building {
            model.building = Set(building);
        }
        if let Some(floor) = update.floor {
            model.floor = Set(Some(floor));
        }
        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }
        if let Some(room_type) = update.room_type {
            model.room_type = Set(room_type.to_string());
        }
        if let Some(ref equipment) = update.equipment {
            model.equipment = Set(equipment_json(equipment)?);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        Ok(Some(model.update(&self.db).await?.into_classroom()))
    }

    /// 删除教室；仍有排课时拒绝
    pub async fn delete_classroom_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;
        let scheduled = schedules::Entity::find()
            .filter(schedules::Column::ClassroomId.eq(id))
            .count(&txn)
            .await?;
        if scheduled > 0 {
            return Err(SchoolSystemError::conflict(format!(
                "该教室仍有 {scheduled} 条排课"
            )));
        }

        let result = Classrooms::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
