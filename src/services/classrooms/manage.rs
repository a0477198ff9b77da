use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassroomService;
use crate::models::{
    ApiResponse, ErrorCode,
    classrooms::requests::{CreateClassroomRequest, UpdateClassroomRequest},
};
use crate::services::{bad_request, not_found, storage_error};
use crate::utils::validate::{validate_code, validate_text};

const MAX_CAPACITY: i32 = 1000;

fn check_fields(
    room_no: Option<&str>,
    building: Option<&str>,
    capacity: Option<i32>,
    equipment: Option<&[String]>,
) -> Result<(), String> {
    if let Some(room_no) = room_no {
        validate_code("教室编号", room_no, 1)?;
    }
    if let Some(building) = building {
        validate_text("教学楼", building, 1, 50)?;
    }
    if let Some(capacity) = capacity
        && !(1..=MAX_CAPACITY).contains(&capacity)
    {
        return Err(format!("容量必须在 1 到 {MAX_CAPACITY} 之间"));
    }
    if let Some(items) = equipment {
        for item in items {
            validate_text("设备名称", item, 1, 50)?;
        }
    }
    Ok(())
}

// 设备名称去除首尾空白并去重，保留原顺序
fn normalize_equipment(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

pub async fn create_classroom(
    service: &ClassroomService,
    mut classroom: CreateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    classroom.room_no = classroom.room_no.trim().to_string();
    if let Err(msg) = check_fields(
        Some(&classroom.room_no),
        Some(&classroom.building),
        Some(classroom.capacity),
        Some(&classroom.equipment),
    ) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    classroom.equipment = normalize_equipment(classroom.equipment);

    let storage = service.get_storage(request)?;
    match storage.create_classroom(classroom).await {
        Ok(room) => {
            info!("创建教室 {} ({})", room.label(), room.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(room, "教室创建成功")))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::ClassroomNotFound,
            ErrorCode::ClassroomAlreadyExists,
            "创建教室失败",
        )),
    }
}

pub async fn update_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    mut update: UpdateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = check_fields(
        update.room_no.as_deref(),
        update.building.as_deref(),
        update.capacity,
        update.equipment.as_deref(),
    ) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    update.equipment = update.equipment.map(normalize_equipment);

    let storage = service.get_storage(request)?;
    match storage.update_classroom(classroom_id, update).await {
        Ok(Some(room)) => Ok(HttpResponse::Ok().json(ApiResponse::success(room, "教室更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::ClassroomNotFound, "教室不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::ClassroomNotFound,
            ErrorCode::ClassroomAlreadyExists,
            "更新教室失败",
        )),
    }
}

/// 仍有排课时拒绝删除
pub async fn delete_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_classroom(classroom_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("教室删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::ClassroomNotFound, "教室不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::ClassroomNotFound,
            ErrorCode::ClassroomInUse,
            "删除教室失败",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fields() {
        let equipment = vec!["投影仪".to_string()];
        assert!(check_fields(Some("A101"), Some("A栋"), Some(60), Some(&equipment)).is_ok());
        assert!(check_fields(None, None, Some(0), None).is_err());
        assert!(check_fields(Some("A 101"), None, None, None).is_err());
        assert!(check_fields(None, None, None, Some(&[" ".to_string()])).is_err());
    }

    #[test]
    fn test_normalize_equipment() {
        let items = vec![
            " 投影仪".to_string(),
            "空调".to_string(),
            "投影仪 ".to_string(),
        ];
        assert_eq!(normalize_equipment(items), vec!["投影仪", "空调"]);
    }
}
