use crate::error::Result;
use crate::model::structs::{Course, User};
use serde_json::{json, Value};
use std::path::PathBuf;

pub fn print_courses(courses: &[Course], short: bool) {
    if courses.is_empty() {
        println!("No courses found!");
        return;
    }

    println!("\nCourses available at E-HUB");
    if short {
        println!("{}", "-".repeat(75));
        println!("{:<50} | {:<18}", "Title", "School");
        println!("{}", "-".repeat(75));
        for course in courses {
            println!("{:<50} | {:<18}", course.course_title, course.school_name);
        }
    } else {
        println!("{}", "-".repeat(120));
        println!(
            "{:<5} | {:<50} | {:<18} | {:<18} | {:<8}",
            "ID", "Title", "Category", "School", "Price"
        );
        println!("{}", "-".repeat(120));
        for course in courses {
            let id = course.id.map(|id| id.to_string()).unwrap_or_default();
            println!(
                "{:<5} | {:<50} | {:<18} | {:<18} | {:<8}€",
                id, course.course_title, course.category, course.school_name, course.price
            );
        }
    }
    println!();
}

pub fn print_course(course: &Course) {
    println!("=====================================");
    println!("ID: {}", course.id.map(|id| id.to_string()).unwrap_or_default());
    println!("Title: {}", course.course_title);
    println!("Category: {}", course.category);
    println!("School: {}", course.school_name);
    println!("Author: {}", course.author);
    println!("Price: {}€", course.price);
    println!("Available until: {}", course.available_until);
    println!("Students: {}", course.student_count);
    println!("Enrolled: {}", if course.is_enrolled { "yes" } else { "no" });
    println!("-------------------------------------");
    println!("{}", course.description);
    if let Some(students) = &course.students {
        println!("-------------------------------------");
        for student in students {
            println!("  - {}", student.username);
        }
    }
    println!("=====================================");
}

pub fn print_user(user: &User) {
    println!("=====================================");
    println!("username: {}", user.username);
    if !user.email.is_empty() {
        println!("email: {}", user.email);
    }
    let full_name = format!("{} {}", user.first_name, user.last_name);
    if !full_name.trim().is_empty() {
        println!("name: {}", full_name.trim());
    }
    println!("groups: {}", user.groups.join(", "));
    println!("=====================================");
}

/// Print a backend message such as `{"message": "Enrolled successfully"}`.
pub fn print_message(value: Option<&Value>) {
    match value {
        Some(value) => match value["message"].as_str() {
            Some(message) => println!("{message}"),
            None => println!("{value}"),
        },
        None => println!("Done."),
    }
}

/// Flatten courses for export
pub fn courses_export(courses: &[Course]) -> Value {
    Value::Array(
        courses
            .iter()
            .map(|course| {
                json!({
                    "id": course.id,
                    "title": course.course_title,
                    "category": course.category,
                    "school": course.school_name,
                    "description": course.description,
                    "price": course.price,
                    "available_until": course.available_until,
                    "post_date": course.post_date,
                    "user": course.user_username,
                    "author": course.author,
                })
            })
            .collect(),
    )
}

/// Write the list to `<timestamp>_list_course.json` in the working directory
pub fn save_courses_json(courses: &[Course]) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = PathBuf::from(format!("{stamp}_list_course.json"));
    std::fs::write(&path, serde_json::to_string_pretty(&courses_export(courses))?)?;
    Ok(path)
}
