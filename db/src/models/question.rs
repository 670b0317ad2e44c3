use std::fmt;

use chrono::{Duration, NaiveDateTime, Utc};
use diesel::{self, Connection, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion<'a> {
    pub question_text: &'a str,
    pub pub_date: NaiveDateTime,
}

impl Question {
    /// True when `pub_date` lies within the day leading up to `now`, both ends included.
    pub fn was_published_recently_at(&self, now: NaiveDateTime) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now().naive_utc())
    }

    pub fn create(
        conn: &SqliteConnection,
        question_text: &str,
        pub_date: NaiveDateTime,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{id, questions as questions_table};

        // sqlite has no RETURNING, read the row back inside the same transaction
        conn.transaction::<Question, Error, _>(|| {
            diesel::insert_into(questions::table)
                .values(NewQuestion {
                    question_text,
                    pub_date,
                })
                .execute(conn)?;

            let question = questions_table.order(id.desc()).first::<Question>(conn)?;

            Ok(question)
        })
    }

    /// Looks up a question that is visible at `now`. Questions scheduled for later
    /// are reported as not found.
    pub fn find_published(
        conn: &SqliteConnection,
        question_id: i32,
        now: NaiveDateTime,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{id, pub_date, questions as questions_table};

        let question = questions_table
            .filter(id.eq(question_id))
            .filter(pub_date.le(now))
            .first::<Question>(conn)?;

        Ok(question)
    }

    pub fn latest_published(
        conn: &SqliteConnection,
        now: NaiveDateTime,
        limit: i64,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{id, pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now))
            .order((pub_date.desc(), id.desc()))
            .limit(limit)
            .load::<Question>(conn)?;

        Ok(results)
    }

    pub fn count(conn: &SqliteConnection) -> Result<i64, Error> {
        use crate::schema::questions::dsl::questions as questions_table;

        let count = questions_table.count().get_result(conn)?;

        Ok(count)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.question_text)
    }
}
