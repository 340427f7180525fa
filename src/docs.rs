use crate::api::attendance::{AttendanceMarked, MarkAttendance};
use crate::model::{AttendanceRecord, AttendanceStatus, Employee, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS API",
        version = "0.1.0",
        description = r#"
## Human Resource Management System

Backend for the HRMS dashboard.

### Resources
- **Employees**: register and list employees. Email addresses are unique.
- **Attendance**: mark an employee Present or Absent for today and list every record.

### Errors
Every failure answers with `{"error": "<message>"}`:
- `400` for constraint violations (duplicate email, missing name/email) and malformed bodies
- `500` for database faults
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,

        crate::api::health::health
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            AttendanceRecord,
            AttendanceStatus,
            MarkAttendance,
            AttendanceMarked
        )
    ),
    tags(
        (name = "Employee", description = "Employee registration APIs"),
        (name = "Attendance", description = "Attendance marking APIs"),
        (name = "Health", description = "Liveness check"),
    )
)]
pub struct ApiDoc;
